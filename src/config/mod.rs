//! Configuration modules for the NextProp API.
//!
//! Each type is loaded from environment variables with defaults; see the
//! `nextprop-config` and `nextprop-cache` crates for variable names.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: API and metrics listen addresses
//! - [`upstream`]: Contacts and listings backends
//! - [`cache`]: Optional Redis cache
//!
//! # Example
//!
//! ```ignore
//! use crate::config::server::ServerConfig;
//! use crate::config::upstream::UpstreamConfig;
//!
//! let server_config = ServerConfig::from_env();
//! let upstream_config = UpstreamConfig::from_env();
//! ```

pub use nextprop_cache::config as cache;
pub use nextprop_config::{cors, server, upstream};
