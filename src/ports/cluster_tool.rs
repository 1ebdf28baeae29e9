use crate::domain::{AppError, Profile};

/// Metadata about an existing cluster, as reported by the kubeconfig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterInfo {
    pub name: String,
    pub server: Option<String>,
}

/// Provisioning tool driving one VM-backed cluster per profile.
pub trait ClusterTool: Send + Sync {
    /// Look up an existing cluster; `None` when the profile was never started.
    fn cluster_info(&self, profile: &str) -> Result<Option<ClusterInfo>, AppError>;

    /// Create or restart the cluster described by `profile`.
    fn start(&self, profile: &Profile) -> Result<(), AppError>;

    fn stop(&self, profile: &str) -> Result<(), AppError>;

    fn delete(&self, profile: &str) -> Result<(), AppError>;

    /// Run `kubectl` against the cluster through the tool's proxy.
    fn kubectl(&self, profile: &str, args: &[&str]) -> Result<(), AppError>;
}
