//! Public projection of a stored event document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event as exposed by the API.
///
/// Every field is optional and always serialized (`null` when absent).
/// Unknown document keys, including the store's `_id`, are ignored; a known
/// key holding a value of the wrong type makes the whole document unmappable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventOut {
    // Basic fields
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,

    // Temporal fields
    /// Start date (ISO format)
    pub date: Option<String>,
    /// End date (ISO format)
    pub end_date: Option<String>,
    /// e.g. "America/Buenos_Aires"
    pub timezone: Option<String>,

    // Location fields
    /// Simple location string for older records
    pub location: Option<String>,
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// `latitude` / `longitude`
    pub coordinates: Option<HashMap<String, f64>>,
    pub place_id: Option<String>,

    // Metadata fields
    /// e.g. "independent", "series"
    pub event_type: Option<String>,
    pub visibility: Option<String>,
    /// Platform-specific identifier
    pub api_id: Option<String>,
    pub cover_url: Option<String>,
    pub organizer: Option<String>,
    pub guest_count: Option<i64>,

    // Technical fields
    pub html_content: Option<String>,
    pub raw_html: Option<String>,
    /// "json", "html" or "fallback"
    pub extraction_method: Option<String>,
}

impl EventOut {
    /// Project a raw store document onto the public shape.
    pub fn from_document(mut document: Value) -> Result<Self, serde_json::Error> {
        if let Value::Object(fields) = &mut document {
            fields.remove("_id");
        }
        serde_json::from_value(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_known_fields_and_ignores_the_rest() {
        let event = EventOut::from_document(json!({
            "_id": {"$oid": "65f0c0ffee"},
            "title": "Rust BA",
            "city": "Buenos Aires",
            "coordinates": {"latitude": -34.6, "longitude": -58.4},
            "guest_count": 42,
            "scraped_by": "luma-spider",
        }))
        .unwrap();

        assert_eq!(event.title.as_deref(), Some("Rust BA"));
        assert_eq!(event.guest_count, Some(42));
        assert_eq!(event.coordinates.unwrap()["latitude"], -34.6);
    }

    #[test]
    fn empty_document_maps_to_all_none() {
        assert_eq!(EventOut::from_document(json!({})).unwrap(), EventOut::default());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let event = EventOut::from_document(json!({"title": null, "guest_count": null})).unwrap();
        assert_eq!(event, EventOut::default());
    }

    #[test]
    fn wrong_field_type_fails_to_map() {
        assert!(EventOut::from_document(json!({"guest_count": "many"})).is_err());
        assert!(EventOut::from_document(json!({"title": 7})).is_err());
        assert!(EventOut::from_document(json!(["not", "an", "object"])).is_err());
    }

    #[test]
    fn serializes_every_field() {
        let json = serde_json::to_value(EventOut::default()).unwrap();
        let fields = json.as_object().unwrap();

        assert_eq!(fields.len(), 21);
        assert!(fields.values().all(Value::is_null));
    }
}
