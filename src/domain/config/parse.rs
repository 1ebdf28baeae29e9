//! Parse and validate environment files.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::bind::{bind_templates, ensure_unique, validate_template};
use crate::domain::{AppError, Environment, Profile, Script, Worker};

/// Token replaced by the owner's name in script arguments.
const NAME_TOKEN: &str = "$name";

/// Read and validate an environment file.
pub fn load(path: &Path) -> Result<Environment, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ReadEnvironment {
        path: path.display().to_string(),
        source,
    })?;
    parse_environment(&content)
}

/// Parse and validate environment YAML content.
pub fn parse_environment(content: &str) -> Result<Environment, AppError> {
    let value: Value = serde_yaml::from_str(content)?;
    let value = match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    };
    let dto: dto::EnvironmentDto = serde_yaml::from_value(value)?;
    validate_environment(dto)
}

fn validate_environment(dto: dto::EnvironmentDto) -> Result<Environment, AppError> {
    let name = dto.name.ok_or_else(|| AppError::validation("Missing 'name'"))?;
    let profiles = dto.profiles.ok_or_else(|| AppError::validation("Missing 'profiles'"))?;
    let templates = dto.templates.unwrap_or_default();
    let workers = dto.workers.unwrap_or_default();

    let templates = templates.into_iter().map(validate_template).collect::<Result<Vec<_>, _>>()?;
    ensure_unique(&templates)?;

    let profiles = bind_templates(&templates, profiles)?
        .into_iter()
        .map(validate_profile)
        .collect::<Result<Vec<_>, _>>()?;

    let workers = validate_workers(workers, &name)?;

    Ok(Environment { name, templates, profiles, workers })
}

fn validate_profile(raw: Mapping) -> Result<Profile, AppError> {
    let name = match raw.get("name").and_then(Value::as_str) {
        Some(name) => name.to_string(),
        None => return Err(AppError::validation("Missing profile 'name'")),
    };

    let dto: dto::ProfileDto = serde_yaml::from_value(Value::Mapping(raw))
        .map_err(|e| AppError::validation(format!("Invalid profile '{}': {}", name, e)))?;

    let scripts = validate_scripts(dto.scripts.unwrap_or_default(), &name, &name)?;
    let workers = validate_workers(dto.workers.unwrap_or_default(), &name)?;

    Ok(Profile {
        container_runtime: dto
            .container_runtime
            .unwrap_or_else(|| Profile::DEFAULT_CONTAINER_RUNTIME.to_string()),
        extra_disks: dto.extra_disks.unwrap_or(Profile::DEFAULT_EXTRA_DISKS),
        disk_size: dto.disk_size.unwrap_or_else(|| Profile::DEFAULT_DISK_SIZE.to_string()),
        nodes: dto.nodes.unwrap_or(Profile::DEFAULT_NODES),
        cni: dto.cni.unwrap_or_else(|| Profile::DEFAULT_CNI.to_string()),
        cpus: dto.cpus.unwrap_or(Profile::DEFAULT_CPUS),
        memory: dto.memory.unwrap_or_else(|| Profile::DEFAULT_MEMORY.to_string()),
        network: dto.network.unwrap_or_else(|| Profile::DEFAULT_NETWORK.to_string()),
        scripts,
        addons: dto.addons.unwrap_or_default(),
        workers,
        name,
    })
}

/// Validate workers owned by `owner` (the environment or a profile).
fn validate_workers(workers: Vec<dto::WorkerDto>, owner: &str) -> Result<Vec<Worker>, AppError> {
    workers
        .into_iter()
        .enumerate()
        .map(|(index, worker)| {
            let name = worker.name.unwrap_or_else(|| format!("{}/{}", owner, index));
            let scripts = validate_scripts(worker.scripts.unwrap_or_default(), owner, &name)?;
            Ok(Worker { name, scripts })
        })
        .collect()
}

fn validate_scripts(
    scripts: Vec<dto::ScriptDto>,
    owner: &str,
    context: &str,
) -> Result<Vec<Script>, AppError> {
    scripts
        .into_iter()
        .map(|script| {
            let file = script.file.ok_or_else(|| {
                AppError::validation(format!("Missing script 'file' in '{}'", context))
            })?;
            let args = script
                .args
                .unwrap_or_else(|| vec![owner.to_string()])
                .into_iter()
                .map(|arg| arg.replace(NAME_TOKEN, owner))
                .collect();
            Ok(Script { file, args })
        })
        .collect()
}

mod dto {
    use serde::Deserialize;
    use serde_yaml::Mapping;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct EnvironmentDto {
        pub name: Option<String>,
        pub templates: Option<Vec<Mapping>>,
        pub profiles: Option<Vec<Mapping>>,
        pub workers: Option<Vec<WorkerDto>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct ProfileDto {
        #[allow(dead_code)]
        pub name: String,
        pub container_runtime: Option<String>,
        pub extra_disks: Option<u32>,
        pub disk_size: Option<String>,
        pub nodes: Option<u32>,
        pub cni: Option<String>,
        pub cpus: Option<u32>,
        pub memory: Option<String>,
        pub network: Option<String>,
        pub scripts: Option<Vec<ScriptDto>>,
        pub addons: Option<Vec<String>>,
        pub workers: Option<Vec<WorkerDto>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct WorkerDto {
        pub name: Option<String>,
        pub scripts: Option<Vec<ScriptDto>>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct ScriptDto {
        pub file: Option<String>,
        pub args: Option<Vec<String>>,
    }
}
