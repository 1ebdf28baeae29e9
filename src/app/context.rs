use crate::domain::Settings;
use crate::ports::{ClusterTool, ProcessRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ClusterTool, R: ProcessRunner> {
    cluster: C,
    runner: R,
    settings: Settings,
}

impl<C: ClusterTool, R: ProcessRunner> AppContext<C, R> {
    /// Create a new application context.
    pub fn new(cluster: C, runner: R, settings: Settings) -> Self {
        Self { cluster, runner, settings }
    }

    /// Provisioning tool driving the clusters.
    pub fn cluster(&self) -> &C {
        &self.cluster
    }

    /// Runner used for worker scripts.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
