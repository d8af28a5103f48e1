//! Server-rendered page shells.
//!
//! These exist so the gate's redirect targets and the dashboard paths
//! resolve; the interactive UI is not served from here.

pub mod controller;
pub mod model;
pub mod router;

pub use model::*;
pub use router::init_pages_router;
