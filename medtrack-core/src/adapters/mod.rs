//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - A JSON file on disk for the KeyValueStore port
//! - An in-memory map for tests and embedding

pub mod json_file;
pub mod memory;
