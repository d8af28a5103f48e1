use serde::Serialize;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::modules::contacts::model::{Contact, ContactsPage, CreateLeadDto};
use crate::modules::health::model::HealthResponse;
use crate::modules::properties::model::{Property, PropertyAddress, PropertyContact};

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Authentication required")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::contacts::controller::get_contacts,
        crate::modules::contacts::controller::add_lead,
        crate::modules::properties::controller::search_properties,
        crate::modules::properties::controller::create_property_lead,
    ),
    components(
        schemas(
            Contact,
            ContactsPage,
            CreateLeadDto,
            Property,
            PropertyAddress,
            PropertyContact,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Contacts", description = "CRM contacts and leads"),
        (name = "Properties", description = "Listing search and listing leads")
    ),
    info(
        title = "NextProp API",
        version = "0.1.0",
        description = "Real-estate CRM API: contact listing, property search and lead capture behind a cookie access gate.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    nextprop_auth::AUTH_TOKEN_COOKIE,
                    "Session token; `nextprop_token` is accepted as an alias",
                ))),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes_and_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/health",
            "/api/contacts",
            "/api/contacts/add-lead",
            "/api/properties/search",
            "/api/properties/leads",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("cookie_auth"));
    }
}
