//! Concurrent fan-out over independent units.
//!
//! Every unit is launched on its own scoped thread, in declared order, with a
//! stagger delay between launches. All launched units run to completion; a
//! failing unit never cancels its siblings. Failures are logged as they
//! happen and reported together once every unit has finished.

use std::thread;
use std::time::Duration;

use tracing::error;

use crate::domain::{AppError, Profile, Worker};

/// Something a fan-out can run, identified by name in logs and failure reports.
pub trait Unit {
    fn name(&self) -> &str;
}

impl Unit for Profile {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Unit for Worker {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Run `operation` on every unit concurrently and wait for all of them.
///
/// `kind` names the units in log messages and in the aggregate error
/// (e.g. `Cluster`, `Worker`). Returns [`AppError::Aggregate`] listing the
/// failed units in declared order when at least one failed.
pub fn execute_all<U, F>(
    kind: &str,
    units: &[U],
    stagger: Duration,
    operation: F,
) -> Result<(), AppError>
where
    U: Unit + Sync,
    F: Fn(&U) -> Result<(), AppError> + Sync,
{
    let operation = &operation;

    let outcomes: Vec<(&str, bool)> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(units.len());

        for (index, unit) in units.iter().enumerate() {
            if index > 0 && !stagger.is_zero() {
                thread::sleep(stagger);
            }
            let handle = scope.spawn(move || match operation(unit) {
                Ok(()) => true,
                Err(err) => {
                    error!("[{}] {} failed: {}", unit.name(), kind, err);
                    false
                }
            });
            handles.push((unit.name(), handle));
        }

        handles
            .into_iter()
            .map(|(name, handle)| {
                let succeeded = handle.join().unwrap_or_else(|_| {
                    error!("[{}] {} panicked", name, kind);
                    false
                });
                (name, succeeded)
            })
            .collect()
    });

    let failed: Vec<String> = outcomes
        .into_iter()
        .filter(|(_, succeeded)| !succeeded)
        .map(|(name, _)| name.to_string())
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate { kind: kind.to_string(), failed })
    }
}
