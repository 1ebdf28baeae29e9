//! drenv: declarative multi-cluster minikube test environments.
//!
//! An environment file names a set of minikube profiles (optionally built from
//! templates) and worker scripts. `start`, `stop` and `delete` fan out across
//! the profiles concurrently and fail only after every profile was attempted.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::Verb;
pub use app::api::{execute, load_environment};
pub use domain::{AppError, Environment, Profile, Script, Settings, Template, Worker};
