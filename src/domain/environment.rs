//! Validated environment model.
//!
//! Values here are produced by [`crate::domain::config`] with templates bound,
//! defaults filled, and `$name` substituted. They are read-only during a run.

use serde::Serialize;
use serde_yaml::Mapping;

/// A set of clusters and workers started and stopped together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Environment {
    pub name: String,
    pub templates: Vec<Template>,
    pub profiles: Vec<Profile>,
    pub workers: Vec<Worker>,
}

/// Named partial profile, merged into profiles that reference it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub name: String,
    /// Profile fields supplied by the template, without `name`.
    #[serde(flatten)]
    pub fields: Mapping,
}

/// One minikube cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub container_runtime: String,
    pub extra_disks: u32,
    pub disk_size: String,
    pub nodes: u32,
    pub cni: String,
    pub cpus: u32,
    pub memory: String,
    pub network: String,
    pub scripts: Vec<Script>,
    pub addons: Vec<String>,
    pub workers: Vec<Worker>,
}

/// Ordered scripts run one after another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worker {
    pub name: String,
    pub scripts: Vec<Script>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    pub file: String,
    pub args: Vec<String>,
}

impl Profile {
    pub const DEFAULT_CONTAINER_RUNTIME: &'static str = "containerd";
    pub const DEFAULT_EXTRA_DISKS: u32 = 0;
    pub const DEFAULT_DISK_SIZE: &'static str = "20g";
    pub const DEFAULT_NODES: u32 = 1;
    pub const DEFAULT_CNI: &'static str = "auto";
    pub const DEFAULT_CPUS: u32 = 2;
    pub const DEFAULT_MEMORY: &'static str = "4g";
    pub const DEFAULT_NETWORK: &'static str = "";
}
