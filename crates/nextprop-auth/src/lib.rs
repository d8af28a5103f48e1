//! # NextProp Auth
//!
//! Request access gate for the NextProp API.
//!
//! This crate provides:
//!
//! - [`rules`]: the declarative table of paths reachable without a credential
//! - [`credentials`]: credential cookie names and token shape validation
//! - [`gate`]: the [`AccessGate`] that turns a request into a [`GateDecision`]
//!
//! # Decisions
//!
//! Every request maps to exactly one of:
//!
//! - **Forward**: the path is exempt, or a credential cookie holds a valid token
//! - **Reject**: unauthenticated access to an `/api/` path (HTTP 401)
//! - **Redirect**: unauthenticated access to a page, sent to `/auth/login`
//!
//! The gate keeps no state between requests and performs no I/O, so it can
//! be evaluated concurrently for any number of requests.
//!
//! # Example
//!
//! ```
//! use nextprop_auth::{AccessGate, GateDecision, IncomingRequest};
//!
//! let gate = AccessGate::default();
//!
//! let request = IncomingRequest::new("/properties")
//!     .with_cookie("nextprop_token", "a".repeat(20));
//! assert_eq!(gate.evaluate(&request), GateDecision::Forward);
//!
//! let request = IncomingRequest::new("/api/contacts");
//! assert!(matches!(gate.evaluate(&request), GateDecision::Reject { status: 401, .. }));
//! ```

pub mod credentials;
pub mod gate;
pub mod rules;

// Re-export commonly used types at crate root
pub use credentials::{
    AUTH_TOKEN_COOKIE, CREDENTIAL_COOKIES, MIN_TOKEN_LENGTH, NEXTPROP_TOKEN_COOKIE, is_valid_token,
};
pub use gate::{AccessGate, GateDecision, IncomingRequest};
pub use rules::{EXEMPT_PATHS, MatchKind, PathRule, is_exempt};
