//! The request access gate.
//!
//! [`AccessGate::evaluate`] classifies a request from its path and cookies
//! alone. It never fails: absent or malformed cookies are simply treated as
//! "no valid credential".
//!
//! ```text
//! exempt path ─────────────────────────────► Forward
//! valid token in any credential cookie ────► Forward
//! no token, path under /api/ ──────────────► Reject 401
//! no token, any other path ────────────────► Redirect /auth/login?from=..&message=..
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::credentials::{CREDENTIAL_COOKIES, MIN_TOKEN_LENGTH, is_valid_token};
use crate::rules::{EXEMPT_PATHS, PathRule, is_exempt};

/// Prefix of routes answered with a 401 instead of a login redirect.
pub const API_PREFIX: &str = "/api/";

/// Where unauthenticated page requests are sent.
pub const LOGIN_PATH: &str = "/auth/login";

/// Prompt shown on the login page after a redirect.
pub const SIGN_IN_MESSAGE: &str = "Please sign in to access this page";

/// Error message of the 401 rejection.
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";

/// The parts of an HTTP request the gate looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingRequest {
    pub path: String,
    pub cookies: HashMap<String, String>,
}

impl IncomingRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cookies: HashMap::new(),
        }
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}

/// Outcome of evaluating a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    /// Let the request reach its handler unmodified.
    Forward,
    /// Answer with an error response instead of handling the request.
    Reject { status: u16, reason: &'static str },
    /// Send the client elsewhere; `query` is appended in order.
    Redirect {
        target: &'static str,
        query: Vec<(&'static str, String)>,
    },
}

impl GateDecision {
    fn login_redirect(from: &str) -> Self {
        GateDecision::Redirect {
            target: LOGIN_PATH,
            query: vec![
                ("from", from.to_string()),
                ("message", SIGN_IN_MESSAGE.to_string()),
            ],
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GateDecision::Forward => "forward",
            GateDecision::Reject { .. } => "reject",
            GateDecision::Redirect { .. } => "redirect",
        }
    }

    /// The percent-encoded redirect location, for [`GateDecision::Redirect`].
    pub fn location(&self) -> Option<String> {
        let GateDecision::Redirect { target, query } = self else {
            return None;
        };

        if query.is_empty() {
            return Some(target.to_string());
        }

        let query = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        Some(format!("{}?{}", target, query))
    }
}

/// Cookie-based access gate.
///
/// Holds only its (immutable) policy; cloning is cheap.
#[derive(Debug, Clone)]
pub struct AccessGate {
    exempt: &'static [PathRule],
    credential_cookies: &'static [&'static str],
    min_token_length: usize,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(EXEMPT_PATHS, CREDENTIAL_COOKIES, MIN_TOKEN_LENGTH)
    }
}

impl AccessGate {
    pub fn new(
        exempt: &'static [PathRule],
        credential_cookies: &'static [&'static str],
        min_token_length: usize,
    ) -> Self {
        Self {
            exempt,
            credential_cookies,
            min_token_length,
        }
    }

    pub fn exempt_rules(&self) -> &'static [PathRule] {
        self.exempt
    }

    pub fn credential_cookies(&self) -> &'static [&'static str] {
        self.credential_cookies
    }

    pub fn is_exempt(&self, path: &str) -> bool {
        is_exempt(self.exempt, path)
    }

    /// True when any credential cookie holds a valid token.
    pub fn is_authenticated(&self, request: &IncomingRequest) -> bool {
        self.credential_cookies
            .iter()
            .any(|name| is_valid_token(request.cookie(name), self.min_token_length))
    }

    pub fn evaluate(&self, request: &IncomingRequest) -> GateDecision {
        if self.is_exempt(&request.path) || self.is_authenticated(request) {
            return GateDecision::Forward;
        }

        if request.path.starts_with(API_PREFIX) {
            return GateDecision::Reject {
                status: 401,
                reason: AUTHENTICATION_REQUIRED,
            };
        }

        GateDecision::login_redirect(&request.path)
    }
}
