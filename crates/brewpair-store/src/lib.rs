//! Brewpair store - embedded key-value store for session state
//!
//! The hosted build of this demo kept session identity and the event
//! mirror in browser localStorage; this crate is the server-side
//! analog. Two backends implement the same byte-oriented interface:
//! - In-memory (for testing)
//! - redb (embedded database persisted across runs)

mod error;
mod memory;
mod redb_store;
mod store;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use redb_store::RedbStore;
pub use store::SessionStore;
