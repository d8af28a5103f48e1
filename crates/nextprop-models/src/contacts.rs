use nextprop_core::serde::{deserialize_lenient_string, deserialize_lenient_vec};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// A CRM contact. Scalar fields accept strings or numbers; values of any
/// other shape are dropped rather than failing the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    /// Display name; always present in API responses, `null` when unknown.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Contact {
    /// Picks the name to display for this contact.
    ///
    /// Precedence: `contactName`, then `"firstName lastName"`, then whichever
    /// of the two exists, then a pre-existing `name`. Empty strings count as
    /// missing.
    pub fn display_name(&self) -> Option<String> {
        if let Some(contact_name) = present(&self.contact_name) {
            return Some(contact_name.to_string());
        }

        let from_parts = match (present(&self.first_name), present(&self.last_name)) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last).trim().to_string()),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => None,
        };

        from_parts
            .filter(|n| !n.is_empty())
            .or_else(|| present(&self.name).map(str::to_string))
    }

    pub fn normalized(mut self) -> Self {
        self.name = self.display_name();
        self
    }
}

/// Contacts listing as returned by the contacts backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactsPage {
    /// Entries that are not JSON objects are dropped.
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub contacts: Vec<Contact>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl ContactsPage {
    pub fn normalized(self) -> Self {
        Self {
            contacts: self.contacts.into_iter().map(Contact::normalized).collect(),
            extra: self.extra,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ContactsQuery {
    /// Bypass the cached listing when exactly `true`.
    pub force_refresh: Option<String>,
}

impl ContactsQuery {
    pub fn force_refresh(&self) -> bool {
        self.force_refresh.as_deref() == Some("true")
    }
}
