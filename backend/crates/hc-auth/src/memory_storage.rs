use crate::{Result as AuthErrorResult, SessionStorage};

use std::collections::BTreeMap;

/// In-process storage. Used in tests and for one-shot sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }

    fn replace_all(&mut self, entries: BTreeMap<String, String>) -> AuthErrorResult<()> {
        self.entries = entries;
        Ok(())
    }

    fn clear(&mut self) -> AuthErrorResult<()> {
        self.entries.clear();
        Ok(())
    }
}
