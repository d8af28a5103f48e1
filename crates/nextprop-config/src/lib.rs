//! # NextProp Config
//!
//! Configuration types for the NextProp API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen addresses for the API and metrics servers
//! - [`upstream`]: Contacts and listings backends
//!
//! # Example
//!
//! ```ignore
//! use nextprop_config::{CorsConfig, ServerConfig, UpstreamConfig};
//!
//! // Load all configs from environment
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let upstream_config = UpstreamConfig::from_env();
//! ```

pub mod cors;
pub mod server;
pub mod upstream;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
