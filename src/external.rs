use crate::command::{CommandFactory, ExecutableCommand, Flow};
use crate::env::Environment;
use crate::error::{Result, ShellError};
use crate::interpreter::Factory;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::process::{Command, ExitStatus, Stdio};

/// How a child process ended, or why it never started.
#[derive(Debug)]
pub enum ExitOutcome {
    /// The program exited normally with this status code.
    Exited(i32),
    /// The program was killed by this signal number.
    Signaled(i32),
    /// The program could not be found or started.
    Failed(std::io::Error),
}

/// Command that is not a builtin.
pub struct ExternalCommand {
    name: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(name: OsString, args: Vec<OsString>) -> Self {
        Self { name, args }
    }

    /// Run the program with inherited stdio and environment, blocking until it exits
    /// or is killed. Stopped children keep the shell waiting.
    pub fn spawn_and_wait(&self) -> ExitOutcome {
        let status = Command::new(&self.name)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();
        match status {
            Ok(status) => outcome_from_status(status),
            Err(e) => ExitOutcome::Failed(e),
        }
    }
}

impl CommandFactory for Factory<ExternalCommand> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name.is_empty() {
            return None;
        }
        Some(Box::new(ExternalCommand::new(
            name.into(),
            args.iter().map(|x| x.into()).collect(),
        )))
    }
}

impl ExecutableCommand for ExternalCommand {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, _env: &mut Environment) -> Result<Flow> {
        // The child writes straight to the inherited descriptors, so anything the
        // shell buffered must reach them first.
        stdout.flush()?;

        match self.spawn_and_wait() {
            ExitOutcome::Exited(code) => {
                log::debug!("{:?} exited with status {code}", self.name);
                Ok(Flow::Continue)
            }
            ExitOutcome::Signaled(signal) => {
                log::debug!("{:?} terminated by signal {signal}", self.name);
                Ok(Flow::Continue)
            }
            ExitOutcome::Failed(e) if e.kind() == ErrorKind::NotFound => Err(
                ShellError::CommandNotFound(self.name.to_string_lossy().into_owned()),
            ),
            ExitOutcome::Failed(source) => Err(ShellError::Launch {
                program: self.name.to_string_lossy().into_owned(),
                source,
            }),
        }
    }
}

#[cfg(unix)]
fn outcome_from_status(exit_status: ExitStatus) -> ExitOutcome {
    use std::os::unix::process::ExitStatusExt;
    match (exit_status.code(), exit_status.signal()) {
        (Some(code), _) => ExitOutcome::Exited(code),
        (None, Some(signal)) => ExitOutcome::Signaled(signal),
        (None, None) => ExitOutcome::Exited(-1),
    }
}

#[cfg(not(unix))]
fn outcome_from_status(exit_status: ExitStatus) -> ExitOutcome {
    ExitOutcome::Exited(exit_status.code().unwrap_or(-1))
}
