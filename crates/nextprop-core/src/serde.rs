//! Lenient deserializers for upstream payloads.
//!
//! The listing and contacts providers are third-party services and are not
//! consistent about field types: identifiers and postal codes arrive as
//! strings or numbers, nested objects are sometimes `null`. These helpers
//! never fail on a single odd field, so one malformed record cannot take
//! down a whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Deserializes a string, number or boolean into `Some(String)`.
///
/// `null`, arrays and objects become `None`.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

/// Like [`deserialize_lenient_string`], with `""` for unusable values.
pub fn deserialize_lenient_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_string(deserializer)?.unwrap_or_default())
}

/// Deserializes a nested `T`, treating `null` and wrongly shaped values as absent.
pub fn deserialize_lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => Ok(T::deserialize(value).ok()),
    }
}

/// Deserializes a list, dropping entries that do not parse as `T`.
///
/// Anything other than an array yields an empty list.
pub fn deserialize_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(parse_each(items)),
        _ => Ok(Vec::new()),
    }
}

/// Parses every item as `T`, skipping the ones that do not fit.
pub fn parse_each<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Office {
        #[serde(default, deserialize_with = "deserialize_lenient_string_or_empty")]
        zip: String,
    }

    #[derive(Debug, Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        id: Option<String>,
        #[serde(default, deserialize_with = "deserialize_lenient_option")]
        office: Option<Office>,
        #[serde(default, deserialize_with = "deserialize_lenient_vec")]
        tags: Vec<Office>,
    }

    fn listing(value: Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_accepts_string_and_numeric_ids() {
        assert_eq!(listing(json!({ "id": "abc-1" })).id.as_deref(), Some("abc-1"));
        assert_eq!(listing(json!({ "id": 4421 })).id.as_deref(), Some("4421"));
        assert_eq!(listing(json!({ "id": true })).id.as_deref(), Some("true"));
    }

    #[test]
    fn test_missing_null_or_structured_id_is_none() {
        assert_eq!(listing(json!({})).id, None);
        assert_eq!(listing(json!({ "id": null })).id, None);
        assert_eq!(listing(json!({ "id": { "v": 1 } })).id, None);
        assert_eq!(listing(json!({ "id": [1, 2] })).id, None);
    }

    #[test]
    fn test_nested_object_tolerates_null_and_wrong_shape() {
        assert!(listing(json!({ "office": null })).office.is_none());
        assert!(listing(json!({ "office": "downtown" })).office.is_none());

        let office = listing(json!({ "office": { "zip": 33101 } })).office.unwrap();
        assert_eq!(office.zip, "33101");

        let office = listing(json!({ "office": { "zip": null } })).office.unwrap();
        assert_eq!(office.zip, "");
    }

    #[test]
    fn test_list_skips_entries_that_do_not_parse() {
        let tags = listing(json!({ "tags": [{ "zip": "1" }, "junk", 7, { "zip": 2 }] })).tags;
        let zips: Vec<_> = tags.iter().map(|t| t.zip.as_str()).collect();
        assert_eq!(zips, vec!["1", "2"]);

        assert!(listing(json!({ "tags": { "zip": "1" } })).tags.is_empty());
    }
}
