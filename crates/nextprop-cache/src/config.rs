//! Redis cache configuration.
//!
//! This module provides configuration for Redis connection settings
//! loaded from environment variables.

use std::env;

/// Redis cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `REDIS_URL`: Redis connection URL (caching is disabled when unset)
/// - `CACHE_TTL_SECONDS`: Default TTL for cached items in seconds (default: `300`)
/// - `CACHE_PREFIX`: Prefix for all cache keys (default: `nextprop`)
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Redis connection URL, `None` to run without a cache.
    pub redis_url: Option<String>,

    /// Default time-to-live for cached items in seconds.
    pub default_ttl_seconds: u64,

    /// Prefix for all cache keys to avoid collisions.
    pub key_prefix: String,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty()),
            default_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            key_prefix: env::var("CACHE_PREFIX").unwrap_or_else(|_| "nextprop".into()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.redis_url.is_some()
    }

    /// Build a prefixed cache key.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = CacheConfig::from_env();
    /// let key = config.prefixed_key("contacts:list");
    /// // Returns "nextprop:contacts:list"
    /// ```
    pub fn prefixed_key(&self, key: &str) -> String {
        format!("{}:{}", self.key_prefix, key)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            default_ttl_seconds: 300,
            key_prefix: "nextprop".into(),
        }
    }
}
