pub mod redis;

pub use redis::RedisStore;
