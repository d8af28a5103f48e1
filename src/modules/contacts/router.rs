use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{add_lead, get_contacts};

pub fn init_contacts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_contacts))
        .route("/add-lead", post(add_lead))
}
