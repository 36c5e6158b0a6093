//! Persistent key-value storage using redb.
//!
//! The site keeps two kinds of state on disk:
//! - Form drafts, one entry per contact-form field
//! - The `lastSubmission` audit record (JSON, write-only)
//!
//! Everything goes through the [`KeyValueStore`] port so the behavior core
//! (drafts, form controller) never touches redb directly and tests can run
//! against an in-memory backend.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, TableDefinition};

use crate::error::SiteError;

// Single table holding all site state, keyed by plain string
const SITE_STATE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("site_state");

/// Port for persistent string key-value state.
///
/// Mirrors the three operations the site needs: get, set, remove-by-key.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;

    /// Remove the entry under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), SiteError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SiteError> {
        (**self).remove(key)
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the site state table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SITE_STATE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SITE_STATE_TABLE)?;
        let value = table.get(key)?.map(|guard| guard.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SITE_STATE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SiteError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SITE_STATE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory backend for tests and headless runs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SiteError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("name").unwrap(), None);

        store.set("name", "Ana").unwrap();
        assert_eq!(store.get("name").unwrap(), Some("Ana".to_string()));

        store.set("name", "Ana B").unwrap();
        assert_eq!(store.get("name").unwrap(), Some("Ana B".to_string()));

        store.remove("name").unwrap();
        assert_eq!(store.get("name").unwrap(), None);
    }

    #[test]
    fn memory_store_remove_absent_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("never-set").unwrap();
    }

    #[test]
    fn redb_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::new(dir.path().join("site.redb")).unwrap();

        store.set("message", "hello from the atelier").unwrap();
        assert_eq!(
            store.get("message").unwrap(),
            Some("hello from the atelier".to_string())
        );

        store.remove("message").unwrap();
        assert_eq!(store.get("message").unwrap(), None);
    }

    #[test]
    fn redb_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.redb");

        {
            let store = RedbStore::new(&path).unwrap();
            store.set("company", "Acme Co").unwrap();
        }

        let store = RedbStore::new(&path).unwrap();
        assert_eq!(store.get("company").unwrap(), Some("Acme Co".to_string()));
    }

    #[test]
    fn arc_wrapped_store_delegates() {
        let store = Arc::new(MemoryStore::new());
        store.set("email", "jo@acme.com").unwrap();
        assert_eq!(store.get("email").unwrap(), Some("jo@acme.com".to_string()));
    }
}
