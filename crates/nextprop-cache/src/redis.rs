//! Redis cache client.
//!
//! Provides async Redis operations with JSON serialization for cached values.

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::config::CacheConfig;

/// Redis cache client with connection pooling.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    default_ttl: Duration,
    key_prefix: String,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("default_ttl", &self.default_ttl)
            .field("key_prefix", &self.key_prefix)
            .finish_non_exhaustive()
    }
}

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cache is not configured")]
    Disabled,
}

impl RedisCache {
    /// Creates a new Redis cache client.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if connection fails.
    pub async fn new(
        redis_url: &str,
        default_ttl: Duration,
        key_prefix: impl Into<String>,
    ) -> Result<Self, CacheError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self {
            conn,
            default_ttl,
            key_prefix: key_prefix.into(),
        })
    }

    /// Connects using `config`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Disabled` when no Redis URL is configured.
    pub async fn connect(config: &CacheConfig) -> Result<Self, CacheError> {
        let url = config.redis_url.as_deref().ok_or(CacheError::Disabled)?;
        Self::new(
            url,
            Duration::from_secs(config.default_ttl_seconds),
            config.key_prefix.clone(),
        )
        .await
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Gets a cached value by key.
    ///
    /// Returns `None` if the key doesn't exist or deserialization fails.
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!(cache.key = %key, "Cache hit");
                match serde_json::from_str(&value) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        error!(cache.key = %key, error = %e, "Failed to deserialize cached value");
                        None
                    }
                }
            }
            Ok(None) => {
                debug!(cache.key = %key, "Cache miss");
                None
            }
            Err(e) => {
                error!(cache.key = %key, error = %e, "Redis GET error");
                None
            }
        }
    }

    /// Sets a cached value with the default TTL.
    #[instrument(skip(self, value), fields(cache.operation = "SET"))]
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        self.set_with_ttl(key, value, self.default_ttl).await
    }

    /// Sets a cached value with a custom TTL.
    #[instrument(skip(self, value), fields(cache.operation = "SETEX"))]
    pub async fn set_with_ttl<T>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let mut conn = self.conn.clone();
        let json = serde_json::to_string(value)?;

        conn.set_ex::<_, _, ()>(key, json, ttl.as_secs()).await?;

        debug!(cache.key = %key, cache.ttl_secs = %ttl.as_secs(), "Cache set");

        Ok(())
    }

    /// Invalidates (deletes) a cached key.
    #[instrument(skip(self), fields(cache.operation = "DEL"))]
    pub async fn invalidate(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(key).await?;

        debug!(cache.key = %key, "Cache invalidated");

        Ok(())
    }
}
