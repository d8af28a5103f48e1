use nextprop_core::serde::{
    deserialize_lenient_option, deserialize_lenient_string, deserialize_lenient_string_or_empty,
};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// Prompt used when a search arrives without one.
pub const DEFAULT_SEARCH_PROMPT: &str = "Properties in Miami under $3M";

/// Listing provider used when the caller does not pick one.
pub const DEFAULT_LISTINGS_API: &str = "zillow";

pub const DEFAULT_SEARCH_LIMIT: u32 = 8;
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Shown for listings that come back without a photo.
pub const DEFAULT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1549415697-8edfc62b131b?q=80&w=1000&auto=format&fit=crop";

const PLACEHOLDER_FIRST_NAMES: &[&str] = &[
    "John", "Sarah", "Michael", "Emma", "David", "Maria", "Robert", "Jessica",
];
const PLACEHOLDER_LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia",
];
const PLACEHOLDER_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "realestate.com",
];

fn deserialize_optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse::<u32>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct PropertySearchParams {
    /// Free-text search prompt
    pub prompt: Option<String>,
    /// Maximum number of listings (1-50, default 8)
    #[serde(default, deserialize_with = "deserialize_optional_u32")]
    pub limit: Option<u32>,
    /// Listing provider (default `zillow`)
    pub api: Option<String>,
}

impl PropertySearchParams {
    pub fn prompt(&self) -> &str {
        self.prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_SEARCH_PROMPT)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT)
    }

    pub fn api(&self) -> &str {
        self.api
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_LISTINGS_API)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PropertyAddress {
    #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
    pub line: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
    pub state_code: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
    pub postal_code: String,
}

impl PropertyAddress {
    /// `"line, city, ST 12345"`
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.line, self.city, self.state_code, self.postal_code
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyContact {
    #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
    pub phone: String,
}

impl PropertyContact {
    /// A made-up listing agent for listings the provider returns without one.
    pub fn placeholder<R: Rng>(rng: &mut R) -> Self {
        let first = PLACEHOLDER_FIRST_NAMES.choose(rng).copied().unwrap_or("John");
        let last = PLACEHOLDER_LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
        let domain = PLACEHOLDER_DOMAINS.choose(rng).copied().unwrap_or("gmail.com");

        Self {
            name: format!("{} {}", first, last),
            email: format!(
                "{}.{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                domain
            ),
            phone: format!(
                "(305) {}-{}",
                rng.gen_range(100..1000),
                rng.gen_range(1000..10000)
            ),
        }
    }
}

/// A listing from the search provider.
///
/// Every typed field tolerates missing, `null` or oddly typed values so a
/// single malformed listing never fails a search.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Property {
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub listing_id: Option<String>,
    /// Provider price (string or number); a display string after reshaping.
    #[serde(default)]
    #[schema(value_type = String)]
    pub price: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub beds: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub baths: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<PropertyAddress>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_size: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub year_built: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub days_on_zillow: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<PropertyContact>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl Property {
    /// Display price for this listing, see [`format_price`].
    pub fn price_label(&self) -> String {
        format_price(&self.price)
    }

    /// Street line of the listing, empty when the provider sent no address.
    pub fn street(&self) -> &str {
        self.address.as_ref().map_or("", |address| address.line.as_str())
    }

    /// Fills in what the dashboard needs to render a listing card: a photo,
    /// a display price, and someone to contact.
    pub fn with_listing_defaults<R: Rng>(mut self, rng: &mut R) -> Self {
        if self.image_url.as_deref().is_none_or(str::is_empty) {
            self.image_url = Some(DEFAULT_IMAGE_URL.to_string());
        }
        self.price = Value::String(self.price_label());
        if self.contact.is_none() {
            self.contact = Some(PropertyContact::placeholder(rng));
        }
        self
    }
}

/// Formats a provider price for display.
///
/// Non-empty strings get a `$` prefix unless they already start with one,
/// numbers are grouped en-US style (`1250000` becomes `$1,250,000`), and
/// anything else is `$TBD`.
pub fn format_price(price: &Value) -> String {
    match price {
        Value::String(s) if !s.is_empty() => {
            if s.starts_with('$') {
                s.clone()
            } else {
                format!("${}", s)
            }
        }
        Value::Number(n) => match n.as_f64() {
            Some(n) => format!("${}", group_thousands(n)),
            None => "$TBD".to_string(),
        },
        _ => "$TBD".to_string(),
    }
}

/// en-US grouping with at most three fraction digits.
fn group_thousands(n: f64) -> String {
    let rendered = format!("{:.3}", n.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((&rendered, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    let sign = if n < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
