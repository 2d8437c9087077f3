//! Test fixtures for event documents.

use serde_json::{json, Value};

/// A complete, well-formed event document as a spider would store it.
pub fn event_document(api_id: &str, title: &str, city: &str) -> Value {
    json!({
        "_id": {"$oid": format!("oid-{}", api_id)},
        "api_id": api_id,
        "title": title,
        "url": format!("https://lu.ma/{}", api_id),
        "description": "A gathering",
        "date": "2025-03-01T19:00:00",
        "timezone": "America/Buenos_Aires",
        "city": city,
        "country": "Argentina",
        "coordinates": {"latitude": -34.6037, "longitude": -58.3816},
        "event_type": "independent",
        "visibility": "public",
        "organizer": "Rust Argentina",
        "guest_count": 40,
        "extraction_method": "json",
    })
}

/// A document whose `guest_count` cannot be projected.
pub fn unmappable_document(api_id: &str, city: &str) -> Value {
    json!({
        "api_id": api_id,
        "title": "Broken record",
        "city": city,
        "guest_count": "about forty",
    })
}
