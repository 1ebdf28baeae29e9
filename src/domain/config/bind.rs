//! Template validation and binding.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use crate::domain::{AppError, Template};

const NAME_KEY: &str = "name";
const TEMPLATE_KEY: &str = "template";

/// Validate a raw template mapping, splitting off its name.
pub(super) fn validate_template(mut raw: Mapping) -> Result<Template, AppError> {
    let name = match raw.remove(NAME_KEY) {
        Some(Value::String(name)) => name,
        _ => return Err(AppError::validation("Missing template 'name'")),
    };
    Ok(Template { name, fields: raw })
}

pub(super) fn ensure_unique(templates: &[Template]) -> Result<(), AppError> {
    let mut seen = std::collections::HashSet::new();
    for template in templates {
        if !seen.insert(template.name.as_str()) {
            return Err(AppError::validation(format!(
                "Duplicate template name '{}'",
                template.name
            )));
        }
    }
    Ok(())
}

/// Merge referenced templates into raw profiles, consuming each `template` key.
///
/// The template is cloned per profile, so bound profiles never share inherited
/// values with each other or with the template.
pub(super) fn bind_templates(
    templates: &[Template],
    profiles: Vec<Mapping>,
) -> Result<Vec<Mapping>, AppError> {
    let by_name: HashMap<&str, &Template> =
        templates.iter().map(|t| (t.name.as_str(), t)).collect();

    profiles
        .into_iter()
        .map(|mut profile| {
            let reference = match profile.remove(TEMPLATE_KEY) {
                None => return Ok(profile),
                Some(Value::String(reference)) => reference,
                Some(_) => {
                    return Err(AppError::validation(format!(
                        "Profile {}: 'template' must be a string",
                        describe(&profile)
                    )));
                }
            };

            let template = by_name.get(reference.as_str()).ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown template '{}' in profile {}",
                    reference,
                    describe(&profile)
                ))
            })?;

            let mut merged = template.fields.clone();
            for (key, value) in profile {
                merged.insert(key, value);
            }
            Ok(merged)
        })
        .collect()
}

fn describe(profile: &Mapping) -> String {
    match profile.get(NAME_KEY).and_then(Value::as_str) {
        Some(name) => format!("'{}'", name),
        None => "<unnamed>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn small() -> Template {
        validate_template(mapping("name: small\ncpus: 2\nmemory: 2g\naddons: [ingress]\n"))
            .unwrap()
    }

    #[test]
    fn template_name_is_split_from_fields() {
        let template = small();

        assert_eq!(template.name, "small");
        assert!(template.fields.get(NAME_KEY).is_none());
        assert_eq!(template.fields.get("cpus").and_then(Value::as_u64), Some(2));
    }

    #[test]
    fn template_without_name_is_rejected() {
        let err = validate_template(mapping("cpus: 4\n")).unwrap_err();
        assert_eq!(err.to_string(), "Missing template 'name'");
    }

    #[test]
    fn duplicate_template_names_are_rejected() {
        let err = ensure_unique(&[small(), small()]).unwrap_err();
        assert!(err.to_string().contains("Duplicate template name 'small'"));
    }

    #[test]
    fn profile_fields_win_over_template_fields() {
        let bound =
            bind_templates(&[small()], vec![mapping("name: c1\ntemplate: small\nmemory: 4g\n")])
                .unwrap();

        let profile = &bound[0];
        assert_eq!(profile.get("name"), Some(&Value::from("c1")));
        assert_eq!(profile.get("cpus").and_then(Value::as_u64), Some(2));
        assert_eq!(profile.get("memory"), Some(&Value::from("4g")));
        assert!(profile.get(TEMPLATE_KEY).is_none());
    }

    #[test]
    fn profile_without_template_is_unchanged() {
        let raw = mapping("name: c1\ncpus: 8\n");
        let bound = bind_templates(&[small()], vec![raw.clone()]).unwrap();
        assert_eq!(bound, vec![raw]);
    }

    #[test]
    fn unknown_template_is_rejected() {
        let err = bind_templates(&[small()], vec![mapping("name: c1\ntemplate: large\n")])
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown template 'large' in profile 'c1'");
    }

    #[test]
    fn bound_profiles_do_not_share_inherited_values() {
        let templates = [small()];
        let mut bound = bind_templates(
            &templates,
            vec![mapping("name: c1\ntemplate: small\n"), mapping("name: c2\ntemplate: small\n")],
        )
        .unwrap();

        if let Some(Value::Sequence(addons)) = bound[0].get_mut("addons") {
            addons.push(Value::from("metallb"));
        } else {
            panic!("addons should be inherited as a sequence");
        }

        let expected = Value::Sequence(vec![Value::from("ingress")]);
        assert_eq!(bound[1].get("addons"), Some(&expected));
        assert_eq!(templates[0].fields.get("addons"), Some(&expected));
    }
}
