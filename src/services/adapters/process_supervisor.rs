use std::io::{self, BufRead, BufReader, PipeReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;

use tracing::debug;

use crate::domain::{AppError, CommandSpec, RingBuffer};
use crate::ports::ProcessRunner;

/// Number of trailing output lines kept for failure reports.
pub const TAIL_LINES: usize = 20;

/// Runs child processes, streaming every output line to the debug log.
///
/// Only the last [`TAIL_LINES`] lines are retained, for inclusion in
/// [`AppError::CommandFailed`]. There is no timeout; callers that need one
/// pass it to the program they run.
#[derive(Debug, Clone, Default)]
pub struct ProcessSupervisor;

impl ProcessSupervisor {
    pub fn new() -> Self {
        Self
    }

    fn command(command: &CommandSpec) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            // Avoid delays in child process logs.
            .env("PYTHONUNBUFFERED", "1")
            .stdin(Stdio::null());
        cmd
    }

    fn spawn(mut cmd: Command, command: &CommandSpec) -> Result<Child, AppError> {
        cmd.spawn().map_err(|source| AppError::Spawn { command: command.to_string(), source })
    }

    /// Spawn with stdout and stderr sharing one pipe, so lines arrive in the
    /// order the child wrote them.
    fn spawn_merged(command: &CommandSpec) -> Result<(Child, PipeReader), AppError> {
        let (reader, writer) = io::pipe()?;
        let mut cmd = Self::command(command);
        cmd.stdout(writer.try_clone()?).stderr(writer);
        let child = Self::spawn(cmd, command)?;
        // `spawn` consumed `cmd` and its copies of the write end, so the
        // reader sees end of file once the child exits.
        Ok((child, reader))
    }
}

impl ProcessRunner for ProcessSupervisor {
    fn run(&self, command: &CommandSpec, label: &str) -> Result<(), AppError> {
        let (mut child, output) = Self::spawn_merged(command)?;
        let mut tail = RingBuffer::new(TAIL_LINES);

        for line in BufReader::new(output).split(b'\n') {
            let Ok(line) = line else { break };
            let line = decode(&line);
            debug!("[{}] {}", label, line);
            tail.push(line);
        }

        let status = child.wait()?;
        check_status(command, label, status, tail)
    }

    fn output(&self, command: &CommandSpec, label: &str) -> Result<String, AppError> {
        let mut cmd = Self::command(command);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        let mut child = Self::spawn(cmd, command)?;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let mut tail = RingBuffer::new(TAIL_LINES);

        let captured = thread::scope(|scope| {
            let reader = scope.spawn(move || -> io::Result<Vec<u8>> {
                let mut buf = Vec::new();
                if let Some(mut stdout) = stdout {
                    stdout.read_to_end(&mut buf)?;
                }
                Ok(buf)
            });

            if let Some(stderr) = stderr {
                for line in BufReader::new(stderr).split(b'\n') {
                    let Ok(line) = line else { break };
                    let line = decode(&line);
                    debug!("[{}] {}", label, line);
                    tail.push(line);
                }
            }

            reader.join().unwrap_or_else(|_| Err(io::Error::other("stdout reader panicked")))
        });

        let status = child.wait()?;
        let captured = captured?;
        check_status(command, label, status, tail)?;
        Ok(String::from_utf8_lossy(&captured).into_owned())
    }
}

fn decode(line: &[u8]) -> String {
    String::from_utf8_lossy(line).trim_end().to_string()
}

fn check_status(
    command: &CommandSpec,
    label: &str,
    status: ExitStatus,
    tail: RingBuffer<String>,
) -> Result<(), AppError> {
    if status.success() {
        return Ok(());
    }
    Err(AppError::CommandFailed {
        label: label.to_string(),
        command: command.to_string(),
        code: status.code(),
        tail: tail.into_vec(),
    })
}
