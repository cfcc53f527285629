use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read-only capability surface the core needs from the markup layer.
///
/// The document model that owns the tags lives in the surrounding tool; the
/// core only ever asks for the tag name and for attribute values by name.
pub trait Tag {
    fn name(&self) -> &str;

    /// Look up an attribute value by its qualified name. `None` when the
    /// attribute is absent or carries no value.
    fn attribute(&self, qualified_name: &str) -> Option<&str>;
}

/// In-memory tag descriptor, deserialized from JSON element dumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDescription {
    pub name: String,

    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl Tag for TagDescription {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, qualified_name: &str) -> Option<&str> {
        self.attributes.get(qualified_name).map(String::as_str)
    }
}
