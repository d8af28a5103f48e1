//! Listing models and DTOs.
//!
//! Re-exports the listing models from the `nextprop-models` crate.

pub use nextprop_models::properties::*;
