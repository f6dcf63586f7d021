// src/application/ports/mod.rs
pub mod content;
pub mod storage;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ContentSourcePort = dyn content::ContentSource;
pub type KeyValueStorePort = dyn storage::KeyValueStore;
pub type ClockPort = dyn time::Clock;
