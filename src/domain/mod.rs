pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod ring_buffer;
pub mod settings;

pub use command::CommandSpec;
pub use environment::{Environment, Profile, Script, Template, Worker};
pub use error::AppError;
pub use ring_buffer::RingBuffer;
pub use settings::Settings;
