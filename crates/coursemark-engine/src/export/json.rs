use crate::models::outline::Outline;

/// Serialize the outline as a pretty-printed JSON document.
///
/// The root is the phase array; nesting and field names mirror the
/// outline model one-to-one and are stable across runs.
pub fn to_json(outline: &Outline) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outline)
}
