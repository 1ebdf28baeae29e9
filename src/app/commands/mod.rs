pub mod delete;
pub mod dump;
pub mod readiness;
pub mod start;
pub mod stop;
pub mod workers;

use clap::ValueEnum;

use crate::app::AppContext;
use crate::domain::{AppError, Environment};
use crate::ports::{ClusterTool, ProcessRunner};

/// Top-level command applied to a whole environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verb {
    /// Start clusters and run their workers
    Start,
    /// Stop clusters
    Stop,
    /// Delete clusters and their configuration
    Delete,
    /// Print the validated environment as YAML
    Dump,
}

impl Verb {
    pub fn execute<C: ClusterTool, R: ProcessRunner>(
        self,
        ctx: &AppContext<C, R>,
        env: &Environment,
    ) -> Result<(), AppError> {
        match self {
            Verb::Start => start::execute(ctx, env),
            Verb::Stop => stop::execute(ctx, env),
            Verb::Delete => delete::execute(ctx, env),
            Verb::Dump => dump::execute(env),
        }
    }
}
