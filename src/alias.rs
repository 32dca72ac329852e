use crate::config::MAX_ALIAS_LENGTH;
use crate::error::{Result, ShellError};

/// A single `alias <name> <expansion>` registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub expansion: String,
}

/// Fixed-capacity, insertion-ordered alias table.
///
/// Entries are never updated or removed. Registering a name twice is allowed,
/// but lookups stop at the first match, so the later entry is unreachable.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    capacity: usize,
}

impl AliasTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a new alias.
    ///
    /// Fails without touching the table when either word is missing, longer than
    /// [`MAX_ALIAS_LENGTH`] characters, or when the table is already full.
    pub fn register(&mut self, name: Option<&str>, expansion: Option<&str>) -> Result<()> {
        let (Some(name), Some(expansion)) = (name, expansion) else {
            return Err(ShellError::InvalidAlias);
        };
        if self.is_full() {
            log::warn!("alias table full, rejecting {name:?}");
            return Err(ShellError::AliasTableFull(self.capacity));
        }
        if let Some(word) = [name, expansion]
            .into_iter()
            .find(|word| word.chars().count() > MAX_ALIAS_LENGTH)
        {
            return Err(ShellError::AliasTooLong {
                word: word.to_string(),
                max: MAX_ALIAS_LENGTH,
            });
        }

        log::info!("alias {name} -> {expansion}");
        self.entries.push(AliasEntry {
            name: name.to_string(),
            expansion: expansion.to_string(),
        });
        Ok(())
    }

    /// Expand `name` once: the expansion of the first matching alias, or `name` itself.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.expansion.as_str())
            .unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::with_capacity(crate::config::MAX_ALIAS_COUNT)
    }
}
