//! # NextProp Core
//!
//! Core types, errors, and utilities for the NextProp API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`serde`]: Lenient deserializers for loosely typed upstream payloads
//!
//! # Example
//!
//! ```ignore
//! use nextprop_core::AppError;
//!
//! let error = AppError::bad_gateway(anyhow::anyhow!("Failed to fetch properties"));
//! ```

pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
