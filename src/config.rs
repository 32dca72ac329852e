//! Shell defaults and the command-line options that override them.

use argh::FromArgs;

/// Prompt printed before every line.
pub const DEFAULT_PROMPT: &str = "> ";
/// Initial size of the line buffer, and the step it grows by.
pub const READ_BUFFER_SIZE: usize = 1024;
/// Initial number of token slots, and the step it grows by.
pub const TOKEN_BUFFER_SIZE: usize = 64;
/// Number of command names kept in history.
pub const HISTORY_SIZE: usize = 10;
/// Number of aliases the alias table accepts.
pub const MAX_ALIAS_COUNT: usize = 10;
/// Longest alias name or expansion, in characters.
pub const MAX_ALIAS_LENGTH: usize = 49;

/// Tunables of a single [`crate::Interpreter`] instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    pub history_size: usize,
    pub max_aliases: usize,
    pub read_buffer_size: usize,
    pub token_buffer_size: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_size: HISTORY_SIZE,
            max_aliases: MAX_ALIAS_COUNT,
            read_buffer_size: READ_BUFFER_SIZE,
            token_buffer_size: TOKEN_BUFFER_SIZE,
        }
    }
}

#[derive(FromArgs, Debug)]
/// A small interactive command interpreter with aliases and history.
pub struct CliArgs {
    #[argh(option, default = "String::from(DEFAULT_PROMPT)")]
    /// prompt printed before each input line.
    pub prompt: String,

    #[argh(option, default = "HISTORY_SIZE")]
    /// number of command names kept by `history`.
    pub history_size: usize,

    #[argh(option, default = "MAX_ALIAS_COUNT")]
    /// maximum number of aliases that can be registered.
    pub max_aliases: usize,

    #[argh(switch)]
    /// read plain lines from stdin even when it is a terminal.
    pub plain: bool,

    #[argh(switch, short = 'v')]
    /// log dispatch decisions and child exit statuses to stderr.
    pub verbose: bool,
}

impl From<&CliArgs> for ShellConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            prompt: args.prompt.clone(),
            history_size: args.history_size,
            max_aliases: args.max_aliases,
            ..Self::default()
        }
    }
}
