//! Access gate middleware for Axum
//!
//! Runs the [`AccessGate`] for every routed request and turns its decision
//! into either the inner response, a JSON 401, or a temporary redirect to the
//! login page.

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use nextprop_auth::{AccessGate, GateDecision, IncomingRequest, gate::LOGIN_PATH};
use nextprop_core::AppError;
use tracing::debug;

use crate::metrics::track_gate_decision;
use crate::state::AppState;

/// Builds the gate's view of a request: the path plus any credential cookies.
///
/// Cookies the gate doesn't read are left out.
pub fn incoming_request(gate: &AccessGate, path: &str, jar: &CookieJar) -> IncomingRequest {
    gate.credential_cookies()
        .iter()
        .filter_map(|name| jar.get(name).map(|cookie| (*name, cookie.value().to_string())))
        .fold(IncomingRequest::new(path), |request, (name, value)| {
            request.with_cookie(name, value)
        })
}

/// Converts a non-forward decision into its HTTP response.
pub fn decision_response(decision: &GateDecision) -> Option<Response> {
    match decision {
        GateDecision::Forward => None,
        GateDecision::Reject { status, reason } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::UNAUTHORIZED);
            Some(AppError::new(status, anyhow!(*reason)).into_response())
        }
        GateDecision::Redirect { .. } => {
            let location = decision
                .location()
                .unwrap_or_else(|| LOGIN_PATH.to_string());
            Some(Redirect::temporary(&location).into_response())
        }
    }
}

/// Middleware that admits or turns away a request based on its cookies.
///
/// # Usage
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/contacts", get(contacts_page))
///     .layer(middleware::from_fn_with_state(state.clone(), access_gate));
/// ```
pub async fn access_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let request = incoming_request(&state.gate, req.uri().path(), &jar);
    let decision = state.gate.evaluate(&request);

    track_gate_decision(decision.kind());

    match decision_response(&decision) {
        None => next.run(req).await,
        Some(response) => {
            debug!(
                path = %request.path,
                decision = decision.kind(),
                "Request stopped at access gate"
            );
            response
        }
    }
}
