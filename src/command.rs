use crate::env::Environment;
use crate::error::Result;
use std::io::Write;

/// What the interpreter should do after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Print the next prompt.
    Continue,
    /// Leave the read loop.
    Stop,
}

/// Object-safe trait for any command that can be executed by the shell.
///
/// This is implemented by built-ins via a blanket impl and by external commands.
pub trait ExecutableCommand {
    /// Executes the command, writing any in-process output to `stdout`.
    ///
    /// Errors are reported by the interpreter; they never end the read loop
    /// unless they are fatal.
    fn execute(self: Box<Self>, stdout: &mut dyn Write, env: &mut Environment) -> Result<Flow>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>>;
}
