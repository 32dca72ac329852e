//! A module implementing lexical analysis (tokenization) of a command line.
//!
//! Tokens are maximal runs of non-delimiter characters. There is no quoting,
//! escaping or comment syntax: every space, tab or newline separates words.

use crate::error::Result;

/// Characters that separate tokens.
pub const DELIMITERS: [char; 3] = [' ', '\t', '\n'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord(usize), // byte offset where the word began
}

struct LexingFSM<'a> {
    line: &'a str,
    state: LexingState,
    step: usize,
}

impl<'a> LexingFSM<'a> {
    fn new(line: &'a str, step: usize) -> Self {
        LexingFSM {
            line,
            state: LexingState::Start,
            step: step.max(1),
        }
    }

    /// Walks the line once, emitting a borrowed slice for every word.
    ///
    /// Token storage starts with `step` slots and grows by `step` at a time.
    fn make_tokens(&mut self) -> Result<Vec<&'a str>> {
        let mut out: Vec<&'a str> = Vec::new();
        out.try_reserve_exact(self.step)?;
        let line = self.line;

        for (pos, ch) in line.char_indices() {
            let is_delim = DELIMITERS.contains(&ch);
            match self.state {
                LexingState::Start if !is_delim => self.state = LexingState::ReadingWord(pos),
                LexingState::ReadingWord(start) if is_delim => {
                    self.push(&mut out, &line[start..pos])?;
                    self.state = LexingState::Start;
                }
                _ => {}
            }
        }

        if let LexingState::ReadingWord(start) = self.state {
            self.push(&mut out, &line[start..])?;
            self.state = LexingState::Start;
        }

        Ok(out)
    }

    fn push(&self, out: &mut Vec<&'a str>, token: &'a str) -> Result<()> {
        if out.len() == out.capacity() {
            log::trace!("growing token storage from {} slots", out.capacity());
            out.try_reserve_exact(self.step)?;
        }
        out.push(token);
        Ok(())
    }
}

/// Split `line` into whitespace-delimited tokens, using `step` as the growth increment
/// of the token storage.
pub fn split_into_tokens_with_step(line: &str, step: usize) -> Result<Vec<&str>> {
    LexingFSM::new(line, step).make_tokens()
}

/// Split `line` into whitespace-delimited tokens.
///
/// The first token is the command name, the rest are its arguments. An empty or
/// blank line yields no tokens.
pub fn split_into_tokens(line: &str) -> Result<Vec<&str>> {
    split_into_tokens_with_step(line, crate::config::TOKEN_BUFFER_SIZE)
}
