use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::Value;
use tracing::instrument;

use nextprop_core::AppError;

use crate::modules::contacts::model::{ContactsPage, ContactsQuery, CreateLeadDto};
use crate::modules::contacts::service::ContactService;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/contacts",
    params(ContactsQuery),
    responses(
        (status = 200, description = "Contacts with display names", body = ContactsPage),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 500, description = "Failed to fetch contacts", body = ErrorResponse)
    ),
    tag = "Contacts",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_contacts(
    State(state): State<AppState>,
    Query(query): Query<ContactsQuery>,
) -> Result<Json<ContactsPage>, AppError> {
    let page = ContactService::list_contacts(
        &state.upstream,
        state.cache.as_ref(),
        query.force_refresh(),
    )
    .await?;

    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/api/contacts/add-lead",
    request_body = CreateLeadDto,
    responses(
        (status = 201, description = "Lead created on the contacts backend", body = serde_json::Value),
        (status = 400, description = "Invalid lead", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    tag = "Contacts",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn add_lead(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateLeadDto>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let created =
        ContactService::create_lead(&state.upstream, state.cache.as_ref(), dto, "contacts")
            .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
