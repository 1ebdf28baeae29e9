//! Deployment readiness wait after a cluster restart.

use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::domain::AppError;
use crate::ports::ClusterTool;

/// Wait until every deployment in every namespace reports `available`.
///
/// Right after a restart kubectl can report stale status, so this first sleeps
/// `initial_wait` unconditionally, then issues one blocking `kubectl wait`
/// bounded by `timeout`. A timeout surfaces as the failure of that command.
pub fn wait_available<C: ClusterTool + ?Sized>(
    cluster: &C,
    profile: &str,
    initial_wait: Duration,
    timeout: Duration,
) -> Result<(), AppError> {
    let start = Instant::now();
    info!("[{}] Waiting until all deployments are available", profile);

    thread::sleep(initial_wait);

    let timeout = format!("{}s", timeout.as_secs());
    cluster.kubectl(
        profile,
        &[
            "wait",
            "deploy",
            "--all",
            "--for",
            "condition=available",
            "--all-namespaces",
            "--timeout",
            &timeout,
        ],
    )?;

    info!(
        "[{}] Deployments are available in {:.2} seconds",
        profile,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
