//! Persistence seam
//!
//! The host supplies a key/value text store (browser localStorage, files on
//! disk). The core only ever reads and writes the two blobs below.

use crate::error::Result;
use std::collections::HashMap;

/// Key of the current month blob
pub const CURRENT_MONTH_KEY: &str = "shoppingCurrentMonth";

/// Key of the history blob
pub const HISTORY_KEY: &str = "shoppingHistory";

pub trait Storage {
    /// Stored text, or None when the key was never written or cannot be read
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, e.g. with blobs written by an older version
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

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
