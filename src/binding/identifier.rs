use std::sync::OnceLock;

use regex::Regex;

use crate::binding::error::BindingError;

/// Bare id and namespace origin extracted from an id attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedId {
    pub raw_id: String,
    pub is_platform_ns: bool,
}

static ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn id_pattern() -> &'static Regex {
    // Anchored at the end so ids embedded in longer values still match
    ID_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)@\+?(\w+:)?id/([^$]+)$").expect("id pattern is well-formed")
    })
}

/// Extract the bare id and its namespace origin from a raw attribute string.
///
/// A non-empty namespace token (e.g. `android:`) marks the id as living in
/// the platform's reserved namespace.
pub fn parse_id_attribute(raw: &str) -> Result<ParsedId, BindingError> {
    let captures =
        id_pattern()
            .captures(raw)
            .ok_or_else(|| BindingError::InvalidIdentifier {
                attribute: raw.to_string(),
            })?;

    let namespace = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let raw_id = captures[2].to_string();

    // `[^$]+` requires at least one character
    debug_assert!(!raw_id.is_empty());

    Ok(ParsedId {
        raw_id,
        is_platform_ns: !namespace.is_empty(),
    })
}
