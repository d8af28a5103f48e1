use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use crate::properties::Property;

/// Source recorded on leads created from a listing.
pub const LEAD_SOURCE: &str = "Real Estate Listing";

/// Type recorded on leads created from a listing.
pub const LEAD_TYPE: &str = "Property Inquiry";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadDto {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub lead_type: Option<String>,
    /// Arbitrary listing payload attached to the lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub property_details: Option<Value>,
}

impl CreateLeadDto {
    /// Builds a lead for the listing agent of `property`.
    ///
    /// Returns `None` when the listing has no contact. A listing without an
    /// address yields a lead without one.
    pub fn from_property(property: &Property) -> Option<Self> {
        let contact = property.contact.as_ref()?;

        Some(Self {
            name: contact.name.clone(),
            email: Some(contact.email.clone()).filter(|e| !e.is_empty()),
            phone: Some(contact.phone.clone()).filter(|p| !p.is_empty()),
            address: property.address.as_ref().map(|address| address.one_line()),
            notes: Some(format!(
                "Interested in: {} - {}",
                property.street(),
                property.price_label()
            )),
            source: Some(LEAD_SOURCE.to_string()),
            lead_type: Some(LEAD_TYPE.to_string()),
            property_details: serde_json::to_value(property).ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(contact: Option<Value>) -> Property {
        let mut value = json!({
            "property_id": "zpid-9",
            "price": 725000,
            "address": {
                "line": "200 Biscayne Blvd",
                "city": "Miami",
                "state_code": "FL",
                "postal_code": "33131"
            }
        });
        if let Some(contact) = contact {
            value["contact"] = contact;
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_lead_from_listing() {
        let property = listing(Some(json!({
            "name": "Maria Garcia",
            "email": "maria.garcia@realestate.com",
            "phone": "(305) 555-0101"
        })));

        let lead = CreateLeadDto::from_property(&property).unwrap();

        assert_eq!(lead.name, "Maria Garcia");
        assert_eq!(lead.email.as_deref(), Some("maria.garcia@realestate.com"));
        assert_eq!(
            lead.address.as_deref(),
            Some("200 Biscayne Blvd, Miami, FL 33131")
        );
        assert_eq!(
            lead.notes.as_deref(),
            Some("Interested in: 200 Biscayne Blvd - $725,000")
        );
        assert_eq!(lead.source.as_deref(), Some(LEAD_SOURCE));
        assert_eq!(lead.lead_type.as_deref(), Some(LEAD_TYPE));
        assert_eq!(lead.property_details.as_ref().unwrap()["property_id"], "zpid-9");
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn test_listing_without_contact_has_no_lead() {
        assert!(CreateLeadDto::from_property(&listing(None)).is_none());
    }

    #[test]
    fn test_listing_without_address() {
        let property: Property = serde_json::from_value(json!({
            "price": "$500,000",
            "address": null,
            "contact": { "name": "Ana Agent", "phone": 3055550100u64 }
        }))
        .unwrap();

        let lead = CreateLeadDto::from_property(&property).unwrap();
        assert_eq!(lead.address, None);
        assert_eq!(lead.phone.as_deref(), Some("3055550100"));
        assert_eq!(lead.email, None);
        assert_eq!(lead.notes.as_deref(), Some("Interested in:  - $500,000"));
    }

    #[test]
    fn test_contact_without_name_fails_validation() {
        let lead = CreateLeadDto::from_property(&listing(Some(json!({ "email": "a@b.test" }))))
            .unwrap();
        assert!(lead.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_serializes_type_field() {
        let lead = CreateLeadDto::from_property(&listing(Some(json!({
            "name": "Ana", "email": "ana@x.test", "phone": ""
        }))))
        .unwrap();

        let out = serde_json::to_value(&lead).unwrap();
        assert_eq!(out["type"], LEAD_TYPE);
        assert!(out.get("phone").is_none());
        assert!(out["propertyDetails"].is_object());
    }

    #[test]
    fn test_validation_rejects_bad_input() {
        let lead: CreateLeadDto =
            serde_json::from_value(json!({ "name": "", "email": "not-an-email" })).unwrap();
        let errors = lead.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }
}
