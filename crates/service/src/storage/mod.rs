//! Storage abstractions for service layer
//!
//! Durable key-value storage standing in for browser local storage: a
//! JSON file holding a map of well-known keys to JSON values.

pub mod json_map_store;
pub mod kv_store;
pub mod local_storage;

pub use kv_store::KeyValueStore;
pub use local_storage::LocalStorage;
