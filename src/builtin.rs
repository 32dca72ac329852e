use crate::command::{CommandFactory, ExecutableCommand, Flow};
use crate::env::Environment;
use crate::error::{Result, ShellError};
use crate::interpreter::Factory;
use argh::{EarlyExit, FromArgs};
use std::env;
use std::io::Write;
use std::path::PathBuf;

/// Names advertised by `help`.
///
/// `ls` and `echo` are listed but have no in-process implementation; they run as
/// ordinary programs.
pub const BUILTIN_NAMES: [&str; 7] = ["cd", "help", "history", "ls", "echo", "alias", "logout"];

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// in-process without spawning a child process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cd" or "history".
    fn name() -> &'static str;

    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<Flow>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, env: &mut Environment) -> Result<Flow> {
        <T as BuiltinCommand>::execute(*self, stdout, env)
    }
}

/// Argument parsing that did not produce a command.
struct InvalidArgs {
    output: String,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(self: Box<Self>, _stdout: &mut dyn Write, _env: &mut Environment) -> Result<Flow> {
        Err(ShellError::Usage(self.output.trim_end().to_string()))
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            // Words are plain positionals: `help`, `--help` and `-x` are never flags.
            let mut argv = Vec::with_capacity(args.len() + 1);
            argv.push("--");
            argv.extend_from_slice(args);
            Some(match T::from_args(&[name], &argv) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, .. }) => Box::new(InvalidArgs { output }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Change the current working directory.
pub struct Cd {
    #[argh(positional, greedy)]
    /// directory to switch to; only the first one is used.
    pub args: Vec<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn execute(self, _stdout: &mut dyn Write, _env: &mut Environment) -> Result<Flow> {
        let target = self
            .args
            .into_iter()
            .next()
            .map(PathBuf::from)
            .ok_or(ShellError::MissingArgument("cd"))?;

        env::set_current_dir(&target).map_err(|source| ShellError::ChangeDir {
            path: target.clone(),
            source,
        })?;
        log::debug!("working directory is now {}", target.display());
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// List the built-in commands.
pub struct Help {
    #[argh(positional, greedy)]
    /// ignored.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(self, stdout: &mut dyn Write, _env: &mut Environment) -> Result<Flow> {
        writeln!(stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(stdout, "The following are built-in commands:")?;
        for name in BUILTIN_NAMES {
            writeln!(stdout, "{name}")?;
        }
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Print the most recently submitted command names, oldest first.
pub struct ShowHistory {
    #[argh(positional, greedy)]
    /// ignored.
    pub _args: Vec<String>,
}

impl BuiltinCommand for ShowHistory {
    fn name() -> &'static str {
        "history"
    }

    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<Flow> {
        env.history.display(stdout)?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Register NAME as a shorthand for COMMAND.
pub struct Alias {
    #[argh(positional, greedy)]
    /// the alias name followed by the command word it stands for.
    pub words: Vec<String>,
}

impl BuiltinCommand for Alias {
    fn name() -> &'static str {
        "alias"
    }

    fn execute(self, _stdout: &mut dyn Write, env: &mut Environment) -> Result<Flow> {
        let [name, command] = self.words.as_slice() else {
            return Err(ShellError::InvalidAlias);
        };
        env.aliases.register(Some(name.as_str()), Some(command.as_str()))?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Leave the shell.
pub struct Logout {
    #[argh(positional, greedy)]
    /// ignored.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Logout {
    fn name() -> &'static str {
        "logout"
    }

    fn execute(self, _stdout: &mut dyn Write, _env: &mut Environment) -> Result<Flow> {
        Ok(Flow::Stop)
    }
}
