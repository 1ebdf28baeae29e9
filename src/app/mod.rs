pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod fan_out;
mod logging;

pub use commands::Verb;
pub use context::AppContext;
