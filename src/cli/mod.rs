//! Helpers behind the `nextprop-cli` binary.

use nextprop_auth::{AccessGate, GateDecision, IncomingRequest};
use nextprop_cache::CacheConfig;
use nextprop_core::AppError;
use nextprop_models::ContactsPage;

use crate::config::cors::CorsConfig;
use crate::config::upstream::UpstreamConfig;
use crate::modules::contacts::service::ContactService;
use crate::state::AppState;

/// Parses a `NAME=VALUE` cookie argument.
pub fn parse_cookie(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{arg}`"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err("cookie name must not be empty".to_string());
    }

    Ok((name.to_string(), value.to_string()))
}

/// Runs the default gate over a path and its cookies.
pub fn check_access(path: &str, cookies: &[(String, String)]) -> GateDecision {
    let request = cookies
        .iter()
        .fold(IncomingRequest::new(path), |request, (name, value)| {
            request.with_cookie(name.as_str(), value.as_str())
        });

    AccessGate::default().evaluate(&request)
}

/// One-line, human readable form of a decision.
pub fn describe_decision(decision: &GateDecision) -> String {
    match decision {
        GateDecision::Forward => "forward: request reaches its handler".to_string(),
        GateDecision::Reject { status, reason } => format!("reject: {status} {reason}"),
        GateDecision::Redirect { .. } => format!(
            "redirect: 307 -> {}",
            decision.location().unwrap_or_default()
        ),
    }
}

/// Fetches the normalized contact list the same way `GET /api/contacts` does.
pub async fn fetch_contacts(force_refresh: bool) -> Result<ContactsPage, AppError> {
    let mut state = AppState::new(UpstreamConfig::from_env(), CorsConfig::from_env())?;

    let cache_config = CacheConfig::from_env();
    if cache_config.is_enabled() {
        match nextprop_cache::RedisCache::connect(&cache_config).await {
            Ok(cache) => state = state.with_cache(cache),
            Err(e) => eprintln!("Cache unavailable ({e}), fetching from backend"),
        }
    }

    ContactService::list_contacts(&state.upstream, state.cache.as_ref(), force_refresh).await
}
