use anyhow::Context;
use nextprop_auth::AccessGate;
use nextprop_cache::{CacheConfig, RedisCache};
use tracing::{info, warn};

use crate::config::cors::CorsConfig;
use crate::config::upstream::UpstreamConfig;
use crate::utils::upstream::UpstreamClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub cache: Option<RedisCache>,
    pub gate: AccessGate,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State without a cache, pointing at the given backends.
    pub fn new(upstream_config: UpstreamConfig, cors_config: CorsConfig) -> anyhow::Result<Self> {
        Ok(Self {
            upstream: UpstreamClient::new(upstream_config)
                .context("Failed to build upstream HTTP client")?,
            cache: None,
            gate: AccessGate::default(),
            cors_config,
        })
    }

    pub fn with_cache(mut self, cache: RedisCache) -> Self {
        self.cache = Some(cache);
        self
    }
}

/// Connects to Redis when configured; the API runs uncached otherwise.
async fn init_cache(config: &CacheConfig) -> Option<RedisCache> {
    if !config.is_enabled() {
        info!("REDIS_URL not set, contacts cache disabled");
        return None;
    }

    match RedisCache::connect(config).await {
        Ok(cache) => {
            info!("Connected to Redis cache");
            Some(cache)
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to Redis, continuing without cache");
            None
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let state = AppState::new(UpstreamConfig::from_env(), CorsConfig::from_env())?;

    Ok(match init_cache(&CacheConfig::from_env()).await {
        Some(cache) => state.with_cache(cache),
        None => state,
    })
}
