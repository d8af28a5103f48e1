//! Middleware modules for request processing.
//!
//! - [`access`]: Cookie-based access gate applied to every routed request
//!
//! # Access Flow
//!
//! 1. The browser sends its `auth_token` or `nextprop_token` cookie
//! 2. [`access::access_gate`] hands the path and those cookies to the
//!    [`nextprop_auth::AccessGate`]
//! 3. Exempt paths and valid tokens reach their handler
//! 4. Other `/api/` requests get a JSON 401, pages redirect to `/auth/login`
//!
//! # Example
//!
//! ```ignore
//! use axum::middleware;
//! use crate::middleware::access::access_gate;
//!
//! let app = router.layer(middleware::from_fn_with_state(state.clone(), access_gate));
//! ```

pub mod access;
