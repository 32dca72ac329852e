use crate::command::{CommandFactory, Flow};
use crate::config::ShellConfig;
use crate::env::Environment;
use crate::error::Result;
use crate::lexer;
use crate::reader::LineReader;
use std::io::Write;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate: builtins and ExternalCommand.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The interactive command loop.
///
/// Each line is split into words, its first word is recorded in history, the
/// first word is expanded through the alias table, and the result is handed to
/// the first [`CommandFactory`] that recognizes it. Builtins come first; the
/// external launcher accepts every remaining name.
///
/// Example
/// ```
/// use tiny_shell::{Flow, Interpreter};
/// let mut sh = Interpreter::default();
/// sh.execute_line("alias bye logout").unwrap();
/// assert_eq!(sh.execute_line("bye").unwrap(), Flow::Stop);
/// ```
pub struct Interpreter {
    config: ShellConfig,
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl Interpreter {
    /// Create an interpreter writing to the process's stdout and stderr.
    pub fn new(config: ShellConfig) -> Self {
        Self::with_output(config, Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    /// Create an interpreter whose builtin output and diagnostics go to the given writers.
    ///
    /// External programs always inherit the process's own standard streams.
    pub fn with_output(config: ShellConfig, stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        use crate::builtin::*;
        use crate::external::ExternalCommand;
        Self {
            env: Environment::new(&config),
            config,
            commands: vec![
                Box::new(Factory::<Cd>::default()),
                Box::new(Factory::<Help>::default()),
                Box::new(Factory::<ShowHistory>::default()),
                Box::new(Factory::<Alias>::default()),
                Box::new(Factory::<Logout>::default()),
                Box::new(Factory::<ExternalCommand>::default()),
            ],
            stdout,
            stderr,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Prompt, read and execute lines until `logout` or the end of input.
    ///
    /// Only fatal errors are returned; everything else has already been reported
    /// on the error stream.
    pub fn repl(&mut self, reader: &mut dyn LineReader) -> Result<()> {
        loop {
            let Some(line) = reader.read_line(&self.config.prompt)? else {
                log::info!("end of input, logging out");
                break;
            };
            if self.execute_line(&line)? == Flow::Stop {
                log::info!("logout");
                break;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Tokenize, record, resolve and dispatch a single line.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let tokens = lexer::split_into_tokens_with_step(line, self.config.token_buffer_size)?;
        let Some((&head, args)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        self.env.history.record(head);
        let name = self.env.aliases.resolve(head).to_string();
        if name != head {
            log::debug!("alias {head} expanded to {name}");
        }
        self.run(&name, args)
    }

    /// Run a resolved command name with its arguments.
    pub fn run(&mut self, name: &str, args: &[&str]) -> Result<Flow> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(name, args) {
                log::debug!("dispatching {name} with {} argument(s)", args.len());
                return match cmd.execute(&mut *self.stdout, &mut self.env) {
                    Ok(flow) => Ok(flow),
                    Err(e) if e.is_fatal() => Err(e),
                    Err(e) => {
                        self.stdout.flush()?;
                        writeln!(self.stderr, "{}: {e}", env!("CARGO_PKG_NAME"))?;
                        Ok(Flow::Continue)
                    }
                };
            }
        }
        Ok(Flow::Continue)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
