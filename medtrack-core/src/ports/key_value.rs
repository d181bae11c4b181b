//! Key-value store port - local storage abstraction

use crate::domain::result::Result;

/// String-keyed, string-valued local storage
///
/// This is the only persistence the app has. Implementations (adapters)
/// decide where the values live; callers only see whole values.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// All keys currently stored, sorted
    fn keys(&self) -> Result<Vec<String>>;
}
