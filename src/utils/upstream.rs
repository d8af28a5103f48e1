//! HTTP client for the contacts and listings backends.

use nextprop_config::UpstreamConfig;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::time::Instant;
use tracing::{Instrument, debug, warn};

use crate::external_http_span;
use crate::metrics::{track_upstream_duration, track_upstream_request};
use crate::utils::tracing::{record_error, record_http_status};

/// Which backend a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Contacts,
    Listings,
}

impl Upstream {
    pub fn name(&self) -> &'static str {
        match self {
            Upstream::Contacts => "contacts",
            Upstream::Listings => "listings",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("{service} backend unreachable: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("{service} backend responded with {status}")]
    Status {
        service: &'static str,
        status: StatusCode,
        message: Option<String>,
    },

    #[error("{service} backend returned an unreadable body: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("nextprop/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    fn url(&self, upstream: Upstream, path: &str) -> String {
        match upstream {
            Upstream::Contacts => self.config.contacts_url(path),
            Upstream::Listings => self.config.listings_url(path),
        }
    }

    fn authorize(&self, upstream: Upstream, request: RequestBuilder) -> RequestBuilder {
        match (upstream, self.config.contacts_api_key.as_deref()) {
            (Upstream::Contacts, Some(key)) => request.bearer_auth(key),
            _ => request,
        }
    }

    pub async fn get_json<T, Q>(
        &self,
        upstream: Upstream,
        path: &str,
        query: &Q,
    ) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(upstream, path);
        let request = self.authorize(upstream, self.http.get(&url).query(query));
        let span = external_http_span!(upstream.name(), "GET", url.as_str());

        send(upstream, request).instrument(span).await
    }

    pub async fn post_json<T, B>(
        &self,
        upstream: Upstream,
        path: &str,
        body: &B,
    ) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(upstream, path);
        let request = self.authorize(upstream, self.http.post(&url).json(body));
        let span = external_http_span!(upstream.name(), "POST", url.as_str());

        send(upstream, request).instrument(span).await
    }
}

async fn send<T: DeserializeOwned>(
    upstream: Upstream,
    request: RequestBuilder,
) -> Result<T, UpstreamError> {
    let service = upstream.name();
    let start = Instant::now();

    let result = request.send().await;
    track_upstream_duration(service, start.elapsed().as_secs_f64());

    let response = result.map_err(|source| {
        record_error(&source.to_string());
        track_upstream_request(service, "error");
        UpstreamError::Transport { service, source }
    })?;

    let status = response.status();
    record_http_status(status.as_u16());
    track_upstream_request(service, status.as_str());

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        warn!(service, status = status.as_u16(), message = ?message, "Upstream request failed");
        return Err(UpstreamError::Status {
            service,
            status,
            message,
        });
    }

    debug!(service, status = status.as_u16(), "Upstream request succeeded");

    response.json::<T>().await.map_err(|source| {
        record_error(&source.to_string());
        UpstreamError::Decode { service, source }
    })
}

/// Pulls the `error` (or `message`) string out of a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|field| value.get(field).and_then(Value::as_str))
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
