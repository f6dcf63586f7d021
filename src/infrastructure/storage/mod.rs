mod memory;
mod redis_store;

pub use memory::InMemoryKeyValueStore;
pub use redis_store::RedisKeyValueStore;
