use anyhow::anyhow;
use nextprop_cache::{RedisCache, invalidate, keys};
use nextprop_core::AppError;
use serde_json::Value;
use tracing::{error, instrument, warn};

use crate::audit_event;
use crate::metrics::{track_contacts_cache, track_lead_created};
use crate::modules::contacts::model::{ContactsPage, CreateLeadDto};
use crate::utils::upstream::{Upstream, UpstreamClient, UpstreamError};

/// Contacts collection on the contacts backend.
pub const CONTACTS_PATH: &str = "/contacts";

pub const FETCH_CONTACTS_FAILED: &str = "Failed to fetch contacts";
pub const ADD_LEAD_FAILED: &str = "Failed to add lead";

/// Maps a backend failure: a backend status passes through with its message,
/// anything else becomes a 500 with `fallback`.
fn upstream_error(err: UpstreamError, fallback: &'static str) -> AppError {
    match err {
        UpstreamError::Status {
            status, message, ..
        } => AppError::new(
            status,
            anyhow!(message.unwrap_or_else(|| fallback.to_string())),
        ),
        other => {
            error!(error = %other, "Contacts backend request failed");
            AppError::internal(anyhow!(fallback))
        }
    }
}

pub struct ContactService;

impl ContactService {
    /// Lists contacts with display names filled in.
    ///
    /// Served from the cache unless `force_refresh` is set; a fresh listing
    /// is written back to the cache.
    #[instrument(skip(upstream, cache))]
    pub async fn list_contacts(
        upstream: &UpstreamClient,
        cache: Option<&RedisCache>,
        force_refresh: bool,
    ) -> Result<ContactsPage, AppError> {
        let cache_key = cache.map(|c| keys::contacts::list(c.key_prefix()));

        if let (Some(cache), Some(key)) = (cache, cache_key.as_deref()) {
            if force_refresh {
                track_contacts_cache("bypass");
            } else if let Some(page) = cache.get::<ContactsPage>(key).await {
                track_contacts_cache("hit");
                return Ok(page);
            } else {
                track_contacts_cache("miss");
            }
        }

        let page: ContactsPage = upstream
            .get_json(Upstream::Contacts, CONTACTS_PATH, &[] as &[(&str, &str)])
            .await
            .map_err(|e| upstream_error(e, FETCH_CONTACTS_FAILED))?;

        let page = page.normalized();

        if let (Some(cache), Some(key)) = (cache, cache_key.as_deref())
            && let Err(e) = cache.set(key, &page).await
        {
            warn!(error = %e, "Failed to cache contacts listing");
        }

        Ok(page)
    }

    /// Creates a lead on the contacts backend and returns the backend's reply.
    #[instrument(skip(upstream, cache, dto), fields(lead.source = ?dto.source))]
    pub async fn create_lead(
        upstream: &UpstreamClient,
        cache: Option<&RedisCache>,
        dto: CreateLeadDto,
        origin: &'static str,
    ) -> Result<Value, AppError> {
        let created: Value = upstream
            .post_json(Upstream::Contacts, CONTACTS_PATH, &dto)
            .await
            .map_err(|e| upstream_error(e, ADD_LEAD_FAILED))?;

        invalidate::contacts(cache).await;

        track_lead_created(origin);
        audit_event!("lead.created", "contacts", lead.origin = origin);

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn transport_error() -> UpstreamError {
        // A builder error stands in for a refused connection
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        UpstreamError::Transport {
            service: "contacts",
            source: err,
        }
    }

    #[test]
    fn test_backend_status_passes_through() {
        let err = upstream_error(
            UpstreamError::Status {
                service: "contacts",
                status: StatusCode::UNAUTHORIZED,
                message: Some("Invalid API key".into()),
            },
            FETCH_CONTACTS_FAILED,
        );
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.error.to_string(), "Invalid API key");
    }

    #[test]
    fn test_backend_status_without_message_uses_fallback() {
        let err = upstream_error(
            UpstreamError::Status {
                service: "contacts",
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: None,
            },
            FETCH_CONTACTS_FAILED,
        );
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error.to_string(), FETCH_CONTACTS_FAILED);
    }

    #[test]
    fn test_transport_failure_is_internal() {
        let err = upstream_error(transport_error(), FETCH_CONTACTS_FAILED);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error.to_string(), FETCH_CONTACTS_FAILED);
    }
}
