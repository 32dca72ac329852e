use std::collections::VecDeque;
use std::io::{self, Write};

/// Bounded log of submitted command names, oldest first.
///
/// Once full, recording a new name evicts the oldest one.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, command_name: &str) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command_name.to_string());
    }

    /// Entries with their 1-based position, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, name.as_str()))
    }

    /// Print one `<index> <name>` line per entry.
    pub fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        for (index, name) in self.entries() {
            writeln!(out, "{index} {name}")?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(crate::config::HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let mut history = History::default();
        history.record("ls");
        history.record("cd");
        history.record("ls");
        let names: Vec<_> = history.entries().collect();
        assert_eq!(names, vec![(1, "ls"), (2, "cd"), (3, "ls")]);
    }

    #[test]
    fn test_fifteen_records_keep_last_ten() {
        let mut history = History::default();
        for i in 1..=15 {
            history.record(&format!("cmd{i}"));
            assert!(history.len() <= 10);
        }
        let names: Vec<_> = history.entries().map(|(_, n)| n.to_string()).collect();
        let expected: Vec<_> = (6..=15).map(|i| format!("cmd{i}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_display_format() {
        let mut history = History::with_capacity(2);
        history.record("pwd");
        history.record("help");
        history.record("history");

        let mut out = Vec::new();
        history.display(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 help\n2 history\n");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = History::with_capacity(0);
        history.record("ls");
        assert!(history.is_empty());
    }
}
