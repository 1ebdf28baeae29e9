use crate::domain::{AppError, Environment};

/// Render the validated environment as YAML.
pub fn render(env: &Environment) -> Result<String, AppError> {
    Ok(serde_yaml::to_string(env)?)
}

pub fn execute(env: &Environment) -> Result<(), AppError> {
    print!("{}", render(env)?);
    Ok(())
}
