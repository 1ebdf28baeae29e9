pub mod adapters;

pub use adapters::minikube_command::MinikubeCommandAdapter;
pub use adapters::process_supervisor::{ProcessSupervisor, TAIL_LINES};
