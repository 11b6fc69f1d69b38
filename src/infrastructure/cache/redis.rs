use crate::domain::ports::key_value_store::KeyValueStore;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::time::Duration;

/// Redis-backed key-value store.
///
/// `ConnectionManager` multiplexes one connection and reconnects on failure;
/// cloning it is cheap, so each call grabs its own handle.
#[derive(Clone)]
pub struct RedisStore {
    conn_manager: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(redis_url: &str) -> ApiResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            ApiError::ServiceUnavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            ApiError::ServiceUnavailable(format!("Failed to connect to Redis: {}", e))
        })?;

        Ok(Self { conn_manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> ApiResult<bool> {
        let mut conn = self.conn_manager.clone();

        // SET NX PX in one round trip; a separate existence check would
        // reintroduce the race this primitive exists to remove.
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("PX")
            .arg(ttl.as_millis() as u64)
            .query_async(&mut conn)
            .await?;

        Ok(reply.is_some())
    }

    async fn get(&self, key: &str) -> ApiResult<Option<String>> {
        let mut conn = self.conn_manager.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> ApiResult<()> {
        let mut conn = self.conn_manager.clone();
        match ttl {
            Some(ttl) => {
                let _: () = conn.set_ex(key, value, ttl.as_secs()).await?;
            }
            None => {
                let _: () = conn.set(key, value).await?;
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> ApiResult<()> {
        let mut conn = self.conn_manager.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }
}
