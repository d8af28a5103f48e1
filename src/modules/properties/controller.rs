use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::Value;
use tracing::instrument;

use nextprop_core::AppError;

use crate::modules::properties::model::{Property, PropertySearchParams};
use crate::modules::properties::service::PropertyService;
use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::AppJson;

#[utoipa::path(
    get,
    path = "/api/properties/search",
    params(PropertySearchParams),
    responses(
        (status = 200, description = "Listings ready for display", body = Vec<Property>),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 502, description = "Failed to fetch properties", body = ErrorResponse)
    ),
    tag = "Properties",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state))]
pub async fn search_properties(
    State(state): State<AppState>,
    Query(params): Query<PropertySearchParams>,
) -> Result<Json<Vec<Property>>, AppError> {
    let properties = PropertyService::search(&state.upstream, &params).await?;

    Ok(Json(properties))
}

#[utoipa::path(
    post,
    path = "/api/properties/leads",
    request_body = Property,
    responses(
        (status = 201, description = "Lead created for the listing agent", body = serde_json::Value),
        (status = 400, description = "Malformed listing or no contact information available for this property.", body = ErrorResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    tag = "Properties",
    security(("cookie_auth" = []))
)]
#[instrument(skip(state, property))]
pub async fn create_property_lead(
    State(state): State<AppState>,
    AppJson(property): AppJson<Property>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let created =
        PropertyService::create_lead(&state.upstream, state.cache.as_ref(), property).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
