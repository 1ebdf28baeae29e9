use std::fs;
use std::io;
use std::time::Instant;

use tracing::info;

use crate::app::{AppContext, fan_out};
use crate::domain::{AppError, Environment, Profile};
use crate::ports::{ClusterTool, ProcessRunner};

/// Delete every cluster and its configuration directory.
pub fn execute<C: ClusterTool, R: ProcessRunner>(
    ctx: &AppContext<C, R>,
    env: &Environment,
) -> Result<(), AppError> {
    let start = Instant::now();
    info!("[{}] Deleting environment", env.name);

    fan_out::execute_all("Cluster", &env.profiles, ctx.settings().stagger, |profile| {
        delete_cluster(ctx, profile)
    })?;

    info!("[{}] Environment deleted in {:.2} seconds", env.name, start.elapsed().as_secs_f64());
    Ok(())
}

fn delete_cluster<C: ClusterTool, R: ProcessRunner>(
    ctx: &AppContext<C, R>,
    profile: &Profile,
) -> Result<(), AppError> {
    let start = Instant::now();
    info!("[{}] Deleting cluster", profile.name);

    ctx.cluster().delete(&profile.name)?;

    let config_dir = ctx.settings().config_dir(&profile.name);
    if config_dir.exists() {
        info!("[{}] Removing config {}", profile.name, config_dir.display());
        match fs::remove_dir_all(&config_dir) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }
    }

    info!("[{}] Cluster deleted in {:.2} seconds", profile.name, start.elapsed().as_secs_f64());
    Ok(())
}
