use crate::alias::AliasTable;
use crate::config::ShellConfig;
use crate::history::History;

/// State owned by one interpreter instance and shared with the commands it runs.
///
/// Nothing here is global: two interpreters in the same process never see each
/// other's aliases or history.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// User-registered aliases, consulted for the first word of every line.
    pub aliases: AliasTable,
    /// Command names of previously submitted lines.
    pub history: History,
}

impl Environment {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            aliases: AliasTable::with_capacity(config.max_aliases),
            history: History::with_capacity(config.history_size),
        }
    }
}
