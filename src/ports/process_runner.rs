use crate::domain::{AppError, CommandSpec};

/// Runs external programs to completion.
pub trait ProcessRunner: Send + Sync {
    /// Run a command, streaming its output to the debug log under `label`.
    ///
    /// Fails with [`AppError::CommandFailed`] when the program exits nonzero.
    fn run(&self, command: &CommandSpec, label: &str) -> Result<(), AppError>;

    /// Run a command and return its captured standard output.
    fn output(&self, command: &CommandSpec, label: &str) -> Result<String, AppError>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, command: &CommandSpec, label: &str) -> Result<(), AppError> {
        (**self).run(command, label)
    }

    fn output(&self, command: &CommandSpec, label: &str) -> Result<String, AppError> {
        (**self).output(command, label)
    }
}
