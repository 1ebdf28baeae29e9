use std::time::Instant;

use tracing::info;

use crate::app::{AppContext, fan_out};
use crate::domain::{AppError, Environment};
use crate::ports::{ClusterTool, ProcessRunner};

/// Stop every cluster. Workers are not involved.
pub fn execute<C: ClusterTool, R: ProcessRunner>(
    ctx: &AppContext<C, R>,
    env: &Environment,
) -> Result<(), AppError> {
    let start = Instant::now();
    info!("[{}] Stopping environment", env.name);

    fan_out::execute_all("Cluster", &env.profiles, ctx.settings().stagger, |profile| {
        let start = Instant::now();
        info!("[{}] Stopping cluster", profile.name);
        ctx.cluster().stop(&profile.name)?;
        info!("[{}] Cluster stopped in {:.2} seconds", profile.name, start.elapsed().as_secs_f64());
        Ok(())
    })?;

    info!("[{}] Environment stopped in {:.2} seconds", env.name, start.elapsed().as_secs_f64());
    Ok(())
}
