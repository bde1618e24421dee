//! Brewpair - AI-assisted coffee and pastry pairing demo
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use brewpair_analytics as analytics;
pub use brewpair_catalog as catalog;
pub use brewpair_llm as llm;
