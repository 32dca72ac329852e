//! A tiny interactive command interpreter.
//!
//! Lines are split on whitespace, the first word is recorded in a bounded history
//! and expanded through a small alias table, then run either as a builtin
//! (`cd`, `help`, `history`, `alias`, `logout`) or as an external program that
//! inherits the shell's standard streams.
//!
//! The main entry point is [`Interpreter`]; feed it lines through any
//! [`reader::LineReader`].

pub mod alias;
mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod external;
pub mod history;
mod interpreter;
#[cfg(test)]
mod io_adapters;
pub mod lexer;
pub mod reader;

pub use builtin::BUILTIN_NAMES;
pub use command::Flow;
pub use config::ShellConfig;
pub use error::ShellError;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
