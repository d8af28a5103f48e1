use serde::Deserialize;

/// Query accepted by the auth pages, as produced by the gate's redirect.
#[derive(Debug, Default, Deserialize)]
pub struct AuthPageQuery {
    /// Path the visitor was trying to reach.
    pub from: Option<String>,
    /// Notice shown above the form.
    pub message: Option<String>,
}
