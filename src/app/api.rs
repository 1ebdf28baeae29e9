//! API Facade for the application.
//!
//! Glues together settings, environment loading, context creation and
//! command execution.

use std::path::Path;

use crate::app::{AppContext, Verb};
use crate::domain::{AppError, Environment, Settings, config};
use crate::services::{MinikubeCommandAdapter, ProcessSupervisor};

/// Create an `AppContext` driving the real `minikube` binary.
fn create_context(
    settings: Settings,
) -> AppContext<MinikubeCommandAdapter<ProcessSupervisor>, ProcessSupervisor> {
    let cluster = MinikubeCommandAdapter::new(ProcessSupervisor::new(), &settings);
    AppContext::new(cluster, ProcessSupervisor::new(), settings)
}

/// Load and validate an environment file.
pub fn load_environment(path: &Path) -> Result<Environment, AppError> {
    config::load(path)
}

/// Run `verb` against the environment defined in `path`.
///
/// The file is fully validated before any external command runs.
pub fn execute(verb: Verb, path: &Path) -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    let env = load_environment(path)?;
    let ctx = create_context(settings);
    verb.execute(&ctx, &env)
}
