//! Worker execution: scripts run in order within a worker, workers run concurrently.

use std::time::{Duration, Instant};

use tracing::info;

use crate::app::fan_out;
use crate::domain::{AppError, CommandSpec, Script, Worker};
use crate::ports::ProcessRunner;

pub fn run_all<R: ProcessRunner>(
    runner: &R,
    workers: &[Worker],
    stagger: Duration,
) -> Result<(), AppError> {
    fan_out::execute_all("Worker", workers, stagger, |worker| run_worker(runner, worker))
}

/// Run a worker's scripts sequentially, stopping at the first failure.
pub fn run_worker<R: ProcessRunner>(runner: &R, worker: &Worker) -> Result<(), AppError> {
    for script in &worker.scripts {
        run_script(runner, script, &worker.name)?;
    }
    Ok(())
}

fn run_script<R: ProcessRunner>(runner: &R, script: &Script, name: &str) -> Result<(), AppError> {
    let start = Instant::now();
    info!("[{}] Starting {}", name, script.file);

    let command = CommandSpec::new(&script.file).args(script.args.iter().cloned());
    runner.run(&command, name)?;

    info!("[{}] {} completed in {:.2} seconds", name, script.file, start.elapsed().as_secs_f64());
    Ok(())
}
