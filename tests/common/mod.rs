#![allow(dead_code)]

use std::collections::HashMap;

use layout_binding::tag::tag_model::TagDescription;

/// Tag descriptor with no attributes.
pub fn tag(name: &str) -> TagDescription {
    TagDescription {
        name: name.to_string(),
        attributes: HashMap::new(),
    }
}

/// Tag descriptor with the given attributes.
pub fn tag_with(name: &str, attrs: &[(&str, &str)]) -> TagDescription {
    TagDescription {
        name: name.to_string(),
        attributes: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}
