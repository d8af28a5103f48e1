//! Credential cookies and token shape validation.
//!
//! Sessions may carry their token under either cookie name while clients
//! migrate from `nextprop_token` to `auth_token`. Both names are read and a
//! request counts as authenticated when any of them holds a valid token.
//!
//! Validation only checks that the token is present and long enough. No
//! signature, expiry or issuer is verified here.

/// Primary credential cookie.
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// Legacy alias of [`AUTH_TOKEN_COOKIE`].
pub const NEXTPROP_TOKEN_COOKIE: &str = "nextprop_token";

/// Credential sources in lookup order.
pub const CREDENTIAL_COOKIES: &[&str] = &[AUTH_TOKEN_COOKIE, NEXTPROP_TOKEN_COOKIE];

/// Minimum token length, in characters.
pub const MIN_TOKEN_LENGTH: usize = 20;

/// Returns true when `token` is present, non-empty and at least `min_length`
/// characters long.
///
/// Length is counted in Unicode scalar values, not UTF-16 code units, so a
/// character outside the Basic Multilingual Plane (an emoji, say) counts once
/// rather than twice. RFC 6265 cookie values are ASCII, where both counts agree.
pub fn is_valid_token(token: Option<&str>, min_length: usize) -> bool {
    token.is_some_and(|token| !token.is_empty() && token.chars().count() >= min_length)
}
