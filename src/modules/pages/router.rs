use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    contacts_page, dashboard_page, forgot_password_page, login_page, properties_page, signup_page,
};

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/properties", get(properties_page))
        .route("/contacts", get(contacts_page))
        .route("/auth/login", get(login_page))
        .route("/auth/signup", get(signup_page))
        .route("/auth/forgot-password", get(forgot_password_page))
}
