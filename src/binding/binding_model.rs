use std::fmt;

use crate::binding::validator::is_valid_field_name;
use crate::tag::tag_model::Tag;

/// A single bindable view element derived from layout markup.
///
/// Immutable after construction except for `is_used` (maintained by external
/// collaborators) and `is_valid` (memoized by `check_validity`).
pub struct Element<'t> {
    /// Bare id with the `@[+]id/` marker and any namespace stripped
    pub raw_id: String,

    /// Whether the id lives in the platform's reserved namespace
    pub is_platform_ns: bool,

    /// Fully qualified view-type name; `None` when the type was unqualified
    pub type_name_full: Option<String>,

    /// Simple (unqualified) view-type name
    pub type_name: String,

    /// Generated language-safe field name
    pub field_name: String,

    /// Result of the last `check_validity` call; false until then
    pub is_valid: bool,

    /// Usage flag, set by external collaborators
    pub is_used: bool,

    pub is_clickable: bool,
    pub is_editable: bool,

    /// Originating tag, owned by the caller's document model
    pub tag: &'t dyn Tag,
}

impl Element<'_> {
    /// Render the qualified reference for this element's id, e.g.
    /// `R.id.btn_submit` or `android.R.id.home`.
    pub fn full_reference(&self) -> String {
        let r_prefix = if self.is_platform_ns {
            "android.R.id."
        } else {
            "R.id."
        };

        format!("{}{}", r_prefix, self.raw_id)
    }

    /// Check the field name against the identifier rule, memoizing the
    /// result onto `is_valid`.
    pub fn check_validity(&mut self) -> bool {
        self.is_valid = is_valid_field_name(&self.field_name);
        self.is_valid
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("raw_id", &self.raw_id)
            .field("is_platform_ns", &self.is_platform_ns)
            .field("type_name_full", &self.type_name_full)
            .field("type_name", &self.type_name)
            .field("field_name", &self.field_name)
            .field("is_valid", &self.is_valid)
            .field("is_used", &self.is_used)
            .field("is_clickable", &self.is_clickable)
            .field("is_editable", &self.is_editable)
            .field("tag", &self.tag.name())
            .finish()
    }
}
