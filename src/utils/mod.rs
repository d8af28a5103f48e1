//! Utility modules for the NextProp API.
//!
//! - [`html`]: Escaping for the server-rendered page shells
//! - [`tracing`]: Distributed tracing utilities
//! - [`upstream`]: HTTP client for the contacts and listings backends

pub mod html;
pub mod tracing;
pub mod upstream;
