use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_property_lead, search_properties};

pub fn init_properties_router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_properties))
        .route("/leads", post(create_property_lead))
}
