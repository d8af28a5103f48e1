//! # NextProp API
//!
//! Backend for a small real-estate CRM, built with Rust and Axum.
//!
//! ## Overview
//!
//! - **Access Gate**: every request is classified by path and session cookie
//!   before it reaches a handler
//! - **Contacts**: CRM contacts proxied from the contacts backend with a
//!   normalized display `name`, cached in Redis when available
//! - **Property Search**: AI listing search proxied from the listings backend
//!   and reshaped for display
//! - **Leads**: create CRM leads directly or from a listing's agent
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Helpers for the nextprop-cli binary
//! ├── config/           # Configuration re-exports (server, CORS, upstreams, cache)
//! ├── middleware/       # Access gate middleware
//! ├── modules/          # Feature modules
//! │   ├── contacts/    # Contact listing and lead creation
//! │   ├── properties/  # Listing search and listing leads
//! │   ├── health/      # Liveness probe
//! │   └── pages/       # HTML shells for dashboard and auth pages
//! └── utils/           # Upstream HTTP client, tracing helpers
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: DTOs, mostly re-exported from `nextprop-models`
//! - `router.rs`: Axum router configuration
//!
//! ## Access Gate
//!
//! The gate runs in front of every route, including the 404 fallback:
//!
//! | Request | Outcome |
//! |---------|---------|
//! | Exempt path (`/auth/*` pages, `/api/health`, `/api/auth`, `/_next/*`, favicon) | Forwarded |
//! | `auth_token` or `nextprop_token` cookie of 20+ characters | Forwarded |
//! | Other `/api/` path | `401 {"error":"Authentication required"}` |
//! | Other page | `307` to `/auth/login?from=<path>&message=...` |
//!
//! Token checks are shape-only; issuing and verifying tokens happens
//! elsewhere.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! CONTACTS_API_URL=https://crm.example.com
//! CONTACTS_API_KEY=your-api-key
//! LISTINGS_API_URL=https://listings.example.com
//! REDIS_URL=redis://localhost:6379   # optional
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! Both sit behind the access gate.
//!
//! ## Modules
//!
//! - [`cli`]: Command-line helpers
//! - [`config`]: Application configuration
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Distributed tracing and logging
//! - [`metrics`]: Prometheus metrics endpoint
//! - [`middleware`]: Access gate middleware
//! - [`modules`]: Feature modules (contacts, properties, health, pages)
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`utils`]: Shared utilities (upstream client, tracing)
//! - [`validator`]: Request validation utilities

pub mod cli;
pub mod config;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use nextprop_auth;
pub use nextprop_cache;
pub use nextprop_config;
pub use nextprop_core;
pub use nextprop_models;
