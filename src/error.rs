use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while the shell reads, resolves or runs a command.
///
/// Only [`ShellError::is_fatal`] errors leave the shell loop; the rest are printed
/// to the error stream and the loop moves on to the next prompt.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line editor: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),

    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),

    #[error("cd: {}: {source}", path.display())]
    ChangeDir { path: PathBuf, source: io::Error },

    #[error("alias: expected exactly two arguments: alias <name> <command>")]
    InvalidAlias,

    #[error("alias: {word}: longer than {max} characters")]
    AliasTooLong { word: String, max: usize },

    #[error("alias: limit of {0} aliases reached")]
    AliasTableFull(usize),

    #[error("{0}")]
    Usage(String),

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{program}: {source}")]
    Launch { program: String, source: io::Error },
}

impl ShellError {
    /// Whether the error must terminate the shell process.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShellError::Allocation(_) | ShellError::Io(_) | ShellError::Editor(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
