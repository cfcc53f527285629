use std::sync::OnceLock;

use regex::Regex;

static VALIDITY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn validity_pattern() -> &'static Regex {
    VALIDITY_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("validity pattern is well-formed")
    })
}

/// Whether a generated field name is a syntactically legal identifier.
pub fn is_valid_field_name(name: &str) -> bool {
    validity_pattern().is_match(name)
}
