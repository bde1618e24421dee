//! Shared fixtures for the integration tests

// not every test binary uses every helper
#![allow(dead_code)]

use std::sync::Arc;

use brewpair::catalog::{coffees, pastries, Coffee, Pastry};
use brewpair::llm::PairingResult;
use brewpair_store::{MemoryStore, SessionStore};

/// Look up a catalog coffee by id
pub fn coffee(id: &str) -> Coffee {
    coffees()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| panic!("no catalog coffee with id {id}"))
}

/// The full pastry case, all items available
pub fn full_menu() -> Vec<Pastry> {
    pastries()
}

pub fn result_ids(results: &[PairingResult]) -> Vec<&str> {
    results.iter().map(|r| r.pastry.id.as_str()).collect()
}

/// Store handle that can be shared between a log and the test body
pub struct SharedStore(pub Arc<MemoryStore>);

impl SessionStore for SharedStore {
    fn get(&self, key: &str) -> brewpair_store::Result<Option<Vec<u8>>> {
        self.0.get(key)
    }
    fn put(&self, key: &str, value: &[u8]) -> brewpair_store::Result<()> {
        self.0.put(key, value)
    }
    fn delete(&self, key: &str) -> brewpair_store::Result<()> {
        self.0.delete(key)
    }
    fn keys(&self, prefix: &str) -> brewpair_store::Result<Vec<String>> {
        self.0.keys(prefix)
    }
}
