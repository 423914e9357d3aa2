use papaya::HashMap;
use std::sync::Arc;
use tracing::trace;

use super::{StorageBackend, StorageError};

/// Volatile backend. Clones share the same map, so two contexts built over
/// clones see each other's writes.
#[derive(Clone)]
pub struct MemoryBackend {
    entries: Arc<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            entries: Arc::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.pin();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let entries = self.entries.pin();
        entries.insert(key.to_string(), value.to_string());
        trace!(key, bytes = value.len(), "Value stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let entries = self.entries.pin();
        if entries.remove(key).is_some() {
            trace!(key, "Value removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("books").unwrap(), None);

        backend.set("books", "[]").unwrap();
        assert_eq!(backend.get("books").unwrap().as_deref(), Some("[]"));

        backend.set("books", "[1]").unwrap();
        assert_eq!(backend.get("books").unwrap().as_deref(), Some("[1]"));

        backend.remove("books").unwrap();
        assert_eq!(backend.get("books").unwrap(), None);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let backend = MemoryBackend::new();
        backend.remove("currentUser").unwrap();
        assert_eq!(backend.get("currentUser").unwrap(), None);
    }

    #[test]
    fn clones_share_entries() {
        let first = MemoryBackend::new();
        let second = first.clone();

        first.set("currentUser", "alice").unwrap();
        assert_eq!(second.get("currentUser").unwrap().as_deref(), Some("alice"));
    }
}
