//! Repairs for known LLM drift, applied to raw agent output before validation.

use serde_json::Value;
use tracing::warn;

use crate::extraction::schema::WorkLocation;

/// Separator LLMs use when they cannot pick a single work arrangement ("Remote | Hybrid").
pub const LOCATION_SEPARATOR: char = '|';

/// Rewrites `output["location"]` to a single recognized label.
/// Leaves the output untouched when it is not an object or carries no `location` key.
pub fn normalize_location(output: &mut Value) {
    let Some(location) = output.as_object_mut().and_then(|map| map.get_mut("location")) else {
        return;
    };

    let normalized = normalized_location(location);
    if location.as_str() != Some(normalized.label()) {
        warn!(
            "Normalizing location {} to '{}'",
            location,
            normalized.label()
        );
    }
    *location = Value::String(normalized.label().to_string());
}

/// Composite strings resolve to their first recognized token; anything else
/// unrecognized or malformed resolves to `Not Specified`.
pub fn normalized_location(value: &Value) -> WorkLocation {
    match value {
        Value::String(s) if s.contains(LOCATION_SEPARATOR) => s
            .split(LOCATION_SEPARATOR)
            .map(str::trim)
            .find_map(WorkLocation::from_label)
            .unwrap_or(WorkLocation::NotSpecified),
        Value::String(s) => WorkLocation::from_label(s.trim()).unwrap_or(WorkLocation::NotSpecified),
        _ => WorkLocation::NotSpecified,
    }
}
