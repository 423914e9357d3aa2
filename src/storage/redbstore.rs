use redb::{
    Database, ReadTransaction, ReadableDatabase, ReadableTable, TableDefinition,
    WriteTransaction,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace};

use super::{StorageBackend, StorageError};

/// Single table holding every stored value: key -> serialized string.
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Durable backend over a redb database file.
#[derive(Clone)]
pub struct RedbBackend {
    db: Arc<Database>,
}

impl RedbBackend {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let db = Database::create(path)?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        debug!(path = %path.display(), "Opened redb storage");
        Ok(Self { db: Arc::new(db) })
    }

    // ==================== Transaction Helpers ====================

    /// Execute a read-only operation within a transaction
    fn with_read_txn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&ReadTransaction) -> Result<T, StorageError>,
    {
        let txn = self.db.begin_read()?;
        f(&txn)
    }

    /// Execute a write operation within a transaction, committing on success
    fn with_write_txn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&WriteTransaction) -> Result<T, StorageError>,
    {
        let txn = self.db.begin_write()?;
        let result = f(&txn)?;
        txn.commit()?;
        Ok(result)
    }
}

impl StorageBackend for RedbBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_read_txn(|txn| {
            let table = txn.open_table(KV_TABLE)?;
            let value = table.get(key)?.map(|guard| guard.value().to_string());
            Ok(value)
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_write_txn(|txn| {
            let mut table = txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
            trace!(key, bytes = value.len(), "Value stored");
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_write_txn(|txn| {
            let mut table = txn.open_table(KV_TABLE)?;
            if table.remove(key)?.is_some() {
                trace!(key, "Value removed");
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.redb");

        {
            let backend = RedbBackend::open(&path).unwrap();
            backend.set("currentUser", "alice").unwrap();
            backend.set("books", "[]").unwrap();
            backend.remove("books").unwrap();
        }

        let backend = RedbBackend::open(&path).unwrap();
        assert_eq!(backend.get("currentUser").unwrap().as_deref(), Some("alice"));
        assert_eq!(backend.get("books").unwrap(), None);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let backend = RedbBackend::open(dir.path().join("store.redb")).unwrap();
        backend.remove("users").unwrap();
        assert_eq!(backend.get("users").unwrap(), None);
    }
}
