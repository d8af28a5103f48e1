use anyhow::anyhow;
use nextprop_cache::RedisCache;
use nextprop_core::AppError;
use nextprop_core::serde::parse_each;
use serde_json::Value;
use tracing::{error, instrument, warn};
use validator::Validate;

use crate::modules::contacts::model::CreateLeadDto;
use crate::modules::contacts::service::ContactService;
use crate::modules::properties::model::{Property, PropertySearchParams};
use crate::utils::upstream::{Upstream, UpstreamClient};

/// AI search endpoint on the listings backend.
pub const AI_SEARCH_PATH: &str = "/api/properties/ai-search";

pub const FETCH_PROPERTIES_FAILED: &str = "Failed to fetch properties";
pub const NO_CONTACT_INFORMATION: &str = "No contact information available for this property.";

pub struct PropertyService;

impl PropertyService {
    /// Runs a listing search and reshapes each result for display.
    #[instrument(skip(upstream))]
    pub async fn search(
        upstream: &UpstreamClient,
        params: &PropertySearchParams,
    ) -> Result<Vec<Property>, AppError> {
        let limit = params.limit();
        let query = [
            ("prompt", params.prompt().to_string()),
            ("limit", limit.to_string()),
            ("api", params.api().to_string()),
        ];

        let raw: Vec<Value> = upstream
            .get_json(Upstream::Listings, AI_SEARCH_PATH, &query)
            .await
            .map_err(|e| {
                error!(error = %e, "Listing search failed");
                AppError::bad_gateway(anyhow!(FETCH_PROPERTIES_FAILED))
            })?;

        let received = raw.len();
        let listings: Vec<Property> = parse_each(raw);
        if listings.len() < received {
            warn!(
                dropped = received - listings.len(),
                "Skipped listings that are not JSON objects"
            );
        }

        let mut rng = rand::thread_rng();
        Ok(listings
            .into_iter()
            .take(limit as usize)
            .map(|property| property.with_listing_defaults(&mut rng))
            .collect())
    }

    /// Turns the listing agent of `property` into a CRM lead.
    #[instrument(skip(upstream, cache, property), fields(property.id = ?property.property_id))]
    pub async fn create_lead(
        upstream: &UpstreamClient,
        cache: Option<&RedisCache>,
        property: Property,
    ) -> Result<Value, AppError> {
        let dto = CreateLeadDto::from_property(&property)
            .ok_or_else(|| AppError::bad_request(anyhow!(NO_CONTACT_INFORMATION)))?;

        dto.validate().map_err(AppError::bad_request)?;

        ContactService::create_lead(upstream, cache, dto, "properties").await
    }
}
