//! redb-based persistent store implementation

use crate::{Result, SessionStore};
use redb::{Database, ReadableTable, TableDefinition};
use std::path::{Path, PathBuf};

const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

/// redb-based persistent store
///
/// All data is stored in a single `.redb` file with automatic crash
/// recovery, so session state survives across runs.
pub struct RedbStore {
    db: Database,
    path: PathBuf,
}

impl RedbStore {
    /// Create or open a store at the given path
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(&path)?;

        // Initialize the table so reads never see a missing table
        let write_txn = db.begin_write()?;
        {
            write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db, path })
    }

    /// Get the file path of this store
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;
        let value = table.get(key)?.map(|guard| guard.value().to_vec());
        Ok(value)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            let key_str = key.value();
            if key_str.starts_with(prefix) {
                keys.push(key_str.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }
}
