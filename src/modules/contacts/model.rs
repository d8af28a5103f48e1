//! Contact models and DTOs.
//!
//! Re-exports the contact and lead models from the `nextprop-models` crate.

pub use nextprop_models::contacts::*;
pub use nextprop_models::leads::CreateLeadDto;
