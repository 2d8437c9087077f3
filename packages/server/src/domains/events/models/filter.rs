//! Event list filters.

use std::borrow::Cow;

use regex::escape;
use serde_json::Value;
use typed_builder::TypedBuilder;

/// Filters for listing events. Present filters combine with AND.
///
/// `city`, `country` and `organizer` are case-insensitive substring matches;
/// `event_type` is an exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option, into)))]
pub struct EventFilter {
    pub city: Option<String>,
    pub country: Option<String>,
    pub event_type: Option<String>,
    pub organizer: Option<String>,
}

impl EventFilter {
    /// Build a filter from raw query values, treating blank values as absent.
    pub fn from_params(
        city: Option<String>,
        country: Option<String>,
        event_type: Option<String>,
        organizer: Option<String>,
    ) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            city: present(city),
            country: present(country),
            event_type: present(event_type),
            organizer: present(organizer),
        }
    }

    /// Evaluate the filter against a raw document.
    pub fn matches(&self, document: &Value) -> bool {
        let field = |name: &str| field_text(document, name);

        contains_ignore_case(field("city").as_deref(), self.city.as_deref())
            && contains_ignore_case(field("country").as_deref(), self.country.as_deref())
            && contains_ignore_case(field("organizer").as_deref(), self.organizer.as_deref())
            && self
                .event_type
                .as_deref()
                .map_or(true, |wanted| field("event_type").as_deref() == Some(wanted))
    }
}

/// A document field read as text, the way Postgres `document->>'field'` does:
/// strings as-is, other scalars and containers as their JSON text, and a
/// missing field or JSON `null` as absent.
pub fn field_text<'a>(document: &'a Value, name: &str) -> Option<Cow<'a, str>> {
    match document.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        other => Some(Cow::Owned(other.to_string())),
    }
}

fn contains_ignore_case(value: Option<&str>, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => value.is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase())),
    }
}

/// Regex used to find an event by title when an id lookup misses.
///
/// Runs of `-` / `_` in the id match any run of whitespace; everything else
/// is matched literally. `"rust-meetup"` becomes `rust\s+meetup`.
pub fn title_pattern(api_id: &str) -> String {
    api_id
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}
