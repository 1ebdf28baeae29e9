pub mod minikube_command;
pub mod process_supervisor;
