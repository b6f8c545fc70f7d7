use crate::Result as AuthErrorResult;

use std::collections::BTreeMap;

/// Key/value store that outlives a single command, the way per-tab session
/// storage outlives a page render.
///
/// Implementations must make `replace_all` atomic: after it returns `Err`
/// the previous contents are still in place.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// Every stored entry.
    fn snapshot(&self) -> BTreeMap<String, String>;

    /// Replace the whole contents in one step.
    fn replace_all(&mut self, entries: BTreeMap<String, String>) -> AuthErrorResult<()>;

    /// Set a single key, keeping the rest.
    fn set(&mut self, key: &str, value: &str) -> AuthErrorResult<()> {
        let mut entries = self.snapshot();
        entries.insert(key.to_string(), value.to_string());
        self.replace_all(entries)
    }

    /// Remove everything.
    fn clear(&mut self) -> AuthErrorResult<()>;
}
