//! In-memory collaborators for host tests.

use std::collections::HashMap;

use crate::error::SessionError;
use crate::models::{AuthStore, Navigator};

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub entries: HashMap<String, String>,
    /// When set, every operation fails as if storage were disabled
    pub unavailable: bool,
    pub removals: usize,
}

impl MemoryStore {
    pub fn with_flag(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    fn check(&self) -> Result<(), SessionError> {
        if self.unavailable {
            return Err(SessionError::StorageUnavailable { reason: "disabled".to_string() });
        }
        Ok(())
    }
}

impl AuthStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.removals += 1;
        self.check()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub visits: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.visits.push(path.to_string());
    }
}
