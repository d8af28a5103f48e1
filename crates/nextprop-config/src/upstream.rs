use std::env;
use std::time::Duration;

/// Backends the API proxies to.
///
/// # Environment Variables
///
/// - `CONTACTS_API_URL`: CRM contacts backend (default: `http://localhost:4000`)
/// - `CONTACTS_API_KEY`: bearer key sent to the contacts backend (optional)
/// - `LISTINGS_API_URL`: property listing search backend (default: `http://localhost:4000`)
/// - `UPSTREAM_TIMEOUT_SECS`: per-request timeout (default: `15`)
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub contacts_api_url: String,
    pub contacts_api_key: Option<String>,
    pub listings_api_url: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        Self {
            contacts_api_url: trim_base_url(
                env::var("CONTACTS_API_URL")
                    .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            ),
            contacts_api_key: env::var("CONTACTS_API_KEY").ok().filter(|k| !k.is_empty()),
            listings_api_url: trim_base_url(
                env::var("LISTINGS_API_URL")
                    .unwrap_or_else(|_| "http://localhost:4000".to_string()),
            ),
            timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
        }
    }

    /// Points both backends at the same base URL.
    pub fn single(base_url: impl Into<String>) -> Self {
        let base_url = trim_base_url(base_url.into());
        Self {
            contacts_api_url: base_url.clone(),
            contacts_api_key: None,
            listings_api_url: base_url,
            timeout_secs: 15,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn contacts_url(&self, path: &str) -> String {
        format!("{}{}", self.contacts_api_url, path)
    }

    pub fn listings_url(&self, path: &str) -> String {
        format!("{}{}", self.listings_api_url, path)
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trims_trailing_slash() {
        let config = UpstreamConfig::single("http://127.0.0.1:4000/");
        assert_eq!(config.contacts_url("/contacts"), "http://127.0.0.1:4000/contacts");
        assert_eq!(
            config.listings_url("/api/properties/ai-search"),
            "http://127.0.0.1:4000/api/properties/ai-search"
        );
    }

    #[test]
    fn test_timeout() {
        let config = UpstreamConfig::single("http://localhost");
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }
}
