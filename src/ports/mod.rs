mod cluster_tool;
mod process_runner;

pub use cluster_tool::{ClusterInfo, ClusterTool};
pub use process_runner::ProcessRunner;
