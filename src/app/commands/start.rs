use std::time::Instant;

use tracing::info;

use super::{readiness, workers};
use crate::app::{AppContext, fan_out};
use crate::domain::{AppError, Environment, Profile};
use crate::ports::{ClusterTool, ProcessRunner};

/// Start every cluster and its workers, then run the environment workers.
///
/// Environment workers are skipped when any cluster failed.
pub fn execute<C: ClusterTool, R: ProcessRunner>(
    ctx: &AppContext<C, R>,
    env: &Environment,
) -> Result<(), AppError> {
    let start = Instant::now();
    info!("[{}] Starting environment", env.name);

    fan_out::execute_all("Cluster", &env.profiles, ctx.settings().stagger, |profile| {
        start_cluster(ctx, profile)
    })?;
    workers::run_all(ctx.runner(), &env.workers, ctx.settings().stagger)?;

    info!("[{}] Environment started in {:.2} seconds", env.name, start.elapsed().as_secs_f64());
    Ok(())
}

fn start_cluster<C: ClusterTool, R: ProcessRunner>(
    ctx: &AppContext<C, R>,
    profile: &Profile,
) -> Result<(), AppError> {
    let start = Instant::now();
    let settings = ctx.settings();
    info!("[{}] Starting cluster", profile.name);

    let existing = ctx.cluster().cluster_info(&profile.name)?;
    if let Some(cluster) = &existing {
        info!(
            "[{}] Restarting existing cluster at {}",
            profile.name,
            cluster.server.as_deref().unwrap_or("unknown server")
        );
    }
    let is_restart = existing.is_some();

    ctx.cluster().start(profile)?;

    info!("[{}] Cluster started in {:.2} seconds", profile.name, start.elapsed().as_secs_f64());

    if is_restart {
        readiness::wait_available(
            ctx.cluster(),
            &profile.name,
            settings.ready_initial_wait,
            settings.ready_timeout,
        )?;
    }

    workers::run_all(ctx.runner(), &profile.workers, settings.stagger)
}
