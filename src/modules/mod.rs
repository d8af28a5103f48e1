//! Feature modules, one per route group.
//!
//! Each module follows the same layout: `router` wires paths to the
//! `controller` handlers, which delegate to a `service` and exchange the
//! types in `model`.

pub mod contacts;
pub mod health;
pub mod pages;
pub mod properties;

use anyhow::anyhow;
use nextprop_core::AppError;

/// Fallback for paths no module serves.
pub async fn not_found() -> AppError {
    AppError::not_found(anyhow!("Not found"))
}
