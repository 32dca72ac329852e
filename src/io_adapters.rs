use std::cell::RefCell;
use std::io::{Result as IoResult, Write};
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Memory-backed writer for capturing interpreter output.
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self {
            buf: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Convenience: create writer and return (writer, rc_handle).
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let mw = MemWriter::new();
        let rc = mw.buf.clone();
        (mw, rc)
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

/// Serializes tests that read or change the process working directory.
pub fn lock_current_dir() -> MutexGuard<'static, ()> {
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_sees_writes() {
        let (mut writer, handle) = MemWriter::with_handle();
        write!(writer, "1 ls").unwrap();
        writeln!(writer).unwrap();
        assert_eq!(handle.borrow().as_slice(), b"1 ls\n");
    }
}
