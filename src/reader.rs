//! Line acquisition: a plain buffered reader and an interactive line editor.

use crate::error::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, ErrorKind, Write};

/// Source of command lines for the interpreter.
pub trait LineReader {
    /// Print `prompt` and read one line without its terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads newline-terminated lines from any [`BufRead`], echoing the prompt to `W`.
///
/// The line buffer starts at `step` bytes and grows by `step` whenever a line
/// outgrows it, so there is no upper bound on line length.
pub struct BufferedReader<R, W> {
    input: R,
    prompt_out: W,
    step: usize,
    exhausted: bool,
}

impl<R: BufRead, W: Write> BufferedReader<R, W> {
    pub fn new(input: R, prompt_out: W, step: usize) -> Self {
        Self {
            input,
            prompt_out,
            step: step.max(1),
            exhausted: false,
        }
    }
}

impl<R: BufRead, W: Write> LineReader for BufferedReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;
        if self.exhausted {
            return Ok(None);
        }

        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(self.step)?;

        loop {
            let available = match self.input.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                self.exhausted = true;
                // An unterminated last line still counts as a line.
                if buffer.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(decode(buffer)));
            }

            let (chunk, consumed, terminated) = match available.iter().position(|&b| b == b'\n') {
                Some(end) => (&available[..end], end + 1, true),
                None => (available, available.len(), false),
            };
            grow_in_steps(&mut buffer, chunk.len(), self.step)?;
            buffer.extend_from_slice(chunk);
            self.input.consume(consumed);

            if terminated {
                return Ok(Some(decode(buffer)));
            }
        }
    }
}

/// Make room for `additional` bytes by adding whole multiples of `step` to the capacity.
fn grow_in_steps(buffer: &mut Vec<u8>, additional: usize, step: usize) -> Result<()> {
    let spare = buffer.capacity() - buffer.len();
    if additional <= spare {
        return Ok(());
    }
    let steps = (additional - spare).div_ceil(step);
    log::trace!(
        "growing line buffer from {} by {} bytes",
        buffer.capacity(),
        steps * step
    );
    buffer.try_reserve_exact(spare + steps * step)?;
    Ok(())
}

fn decode(buffer: Vec<u8>) -> String {
    match String::from_utf8(buffer) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Interactive reader backed by rustyline, used when stdin is a terminal.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let line = editor_line(self.editor.readline(prompt))?;
        if let Some(entry) = line.as_deref().filter(|l| worth_recalling(l)) {
            self.editor.add_history_entry(entry)?;
        }
        Ok(line)
    }
}

/// Map a line editor result onto the [`LineReader`] contract.
fn editor_line(result: rustyline::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        // Ctrl-C abandons the current line only.
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Blank lines are not offered for up-arrow recall.
fn worth_recalling(line: &str) -> bool {
    !line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn reader(input: &str) -> BufferedReader<Cursor<Vec<u8>>, Vec<u8>> {
        BufferedReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 1024)
    }

    #[test]
    fn test_reads_lines_without_terminator() {
        let mut r = reader("ls -l\ncd /tmp\n");
        assert_eq!(r.read_line("> ").unwrap().as_deref(), Some("ls -l"));
        assert_eq!(r.read_line("> ").unwrap().as_deref(), Some("cd /tmp"));
        assert_eq!(r.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_prompt_is_printed_before_each_read() {
        let mut r = reader("a\n");
        r.read_line("> ").unwrap();
        r.read_line("> ").unwrap();
        assert_eq!(r.prompt_out, b"> > ");
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut r = reader("\n\n");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line("").unwrap(), None);
    }

    #[test]
    fn test_unterminated_last_line_then_end_of_input() {
        let mut r = reader("first\nlogout");
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("first"));
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("logout"));
        assert_eq!(r.read_line("").unwrap(), None);
        assert_eq!(r.read_line("").unwrap(), None);
    }

    #[test]
    fn test_long_line_grows_buffer() {
        let long = "x".repeat(5000);
        let input = format!("{long}\nnext\n");
        // Tiny BufReader capacity forces many partial fills.
        let inner = BufReader::with_capacity(7, Cursor::new(input.into_bytes()));
        let mut r = BufferedReader::new(inner, std::io::sink(), 16);
        assert_eq!(r.read_line("").unwrap(), Some(long));
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes = vec![b'a', 0xff, b'b', b'\n'];
        let mut r = BufferedReader::new(Cursor::new(bytes), std::io::sink(), 8);
        assert_eq!(r.read_line("").unwrap().as_deref(), Some("a\u{fffd}b"));
    }

    #[test]
    fn test_editor_line_mapping() {
        assert_eq!(editor_line(Ok("ls -l".into())).unwrap().as_deref(), Some("ls -l"));
        assert_eq!(editor_line(Err(ReadlineError::Interrupted)).unwrap().as_deref(), Some(""));
        assert_eq!(editor_line(Err(ReadlineError::Eof)).unwrap(), None);

        let err = editor_line(Err(ReadlineError::Io(std::io::Error::other("tty gone")))).unwrap_err();
        assert!(matches!(err, crate::error::ShellError::Editor(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_blank_lines_are_not_recalled() {
        assert!(worth_recalling("cd /tmp"));
        assert!(!worth_recalling(""));
        assert!(!worth_recalling(" \t "));
    }

    #[test]
    fn test_grow_in_steps_adds_whole_steps() {
        let mut buffer: Vec<u8> = Vec::with_capacity(4);
        buffer.extend_from_slice(b"abcd");
        grow_in_steps(&mut buffer, 5, 4).unwrap();
        assert!(buffer.capacity() >= 12);
        let before = buffer.capacity();
        grow_in_steps(&mut buffer, 1, 4).unwrap();
        assert_eq!(buffer.capacity(), before);
    }
}
