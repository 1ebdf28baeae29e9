use std::sync::Mutex;

use crate::domain::{AppError, CommandSpec};
use crate::ports::ProcessRunner;

/// Records every command and fails or answers the ones matching configured needles.
///
/// A needle matches when it is a substring of the rendered command line.
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<(CommandSpec, String)>>,
    failures: Vec<String>,
    outputs: Vec<(String, String)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command whose line contains `needle`.
    pub fn fail_on(mut self, needle: &str) -> Self {
        self.failures.push(needle.to_string());
        self
    }

    /// Answer `output` calls whose line contains `needle` with `stdout`.
    pub fn with_output(mut self, needle: &str, stdout: &str) -> Self {
        self.outputs.push((needle.to_string(), stdout.to_string()));
        self
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().iter().map(|(command, _)| command.clone()).collect()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, label)| label.clone()).collect()
    }

    fn record(&self, command: &CommandSpec, label: &str) -> Result<String, AppError> {
        self.calls.lock().unwrap().push((command.clone(), label.to_string()));

        let line = command.to_string();
        if self.failures.iter().any(|needle| line.contains(needle)) {
            return Err(AppError::CommandFailed {
                label: label.to_string(),
                command: line,
                code: Some(1),
                tail: vec!["simulated failure".to_string()],
            });
        }
        Ok(line)
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, command: &CommandSpec, label: &str) -> Result<(), AppError> {
        self.record(command, label).map(|_| ())
    }

    fn output(&self, command: &CommandSpec, label: &str) -> Result<String, AppError> {
        let line = self.record(command, label)?;
        let stdout = self
            .outputs
            .iter()
            .find(|(needle, _)| line.contains(needle.as_str()))
            .map(|(_, stdout)| stdout.clone())
            .unwrap_or_else(|| "{}".to_string());
        Ok(stdout)
    }
}
