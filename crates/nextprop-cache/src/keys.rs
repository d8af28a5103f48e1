//! Cache key generation and invalidation utilities.

use crate::RedisCache;
use tracing::warn;

/// Builds a cache key under `prefix`.
fn build_key(prefix: &str, parts: &[&str]) -> String {
    format!("{}:{}", prefix, parts.join(":"))
}

/// Cache keys for contact data.
pub mod contacts {
    use super::*;

    /// Key for the full contacts listing.
    pub fn list(prefix: &str) -> String {
        build_key(prefix, &["contacts", "list"])
    }
}

/// Cache invalidation helpers.
pub mod invalidate {
    use super::*;

    /// Drop the cached contacts listing.
    ///
    /// Call this after a lead or contact is created.
    pub async fn contacts(cache: Option<&RedisCache>) {
        let Some(cache) = cache else { return };

        if let Err(e) = cache
            .invalidate(&super::contacts::list(cache.key_prefix()))
            .await
        {
            warn!(error = %e, "Failed to invalidate contacts list cache");
        }
    }
}
