use anyhow::Context;
use std::io::{self, IsTerminal};
use tiny_shell::Interpreter;
use tiny_shell::config::{CliArgs, ShellConfig};
use tiny_shell::reader::{BufferedReader, EditorReader, LineReader};

fn main() -> anyhow::Result<()> {
    let args: CliArgs = argh::from_env();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ShellConfig::from(&args);
    log::debug!("starting with {config:?}");

    let mut reader: Box<dyn LineReader> = if io::stdin().is_terminal() && !args.plain {
        Box::new(EditorReader::new().context("failed to initialise line editor")?)
    } else {
        Box::new(BufferedReader::new(
            io::stdin().lock(),
            io::stdout(),
            config.read_buffer_size,
        ))
    };

    let mut sh = Interpreter::new(config);
    sh.repl(reader.as_mut())?;
    Ok(())
}
