//! # NextProp Cache
//!
//! Redis-based caching utilities for the NextProp API.
//!
//! This crate provides:
//! - Redis connection management
//! - Cache operations (get, set, delete)
//! - Cache configuration from environment variables
//! - Cache key generation and invalidation helpers
//!
//! Caching is optional: when `REDIS_URL` is unset the API runs without it
//! and every lookup goes to the upstream backend.
//!
//! # Example
//!
//! ```ignore
//! use nextprop_cache::{CacheConfig, RedisCache};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CacheConfig::from_env();
//!     let cache = RedisCache::connect(&config).await.unwrap();
//!
//!     // Set a value
//!     cache.set("key", &my_value).await.unwrap();
//!
//!     // Get a value
//!     let value: Option<MyType> = cache.get("key").await;
//! }
//! ```

pub mod config;
pub mod keys;
pub mod redis;

pub use config::CacheConfig;
pub use keys::invalidate;
pub use redis::{CacheError, RedisCache};
