use crate::binding::binding_model::Element;
use crate::binding::builder::build_element;
use crate::binding::error::BindingError;
use crate::tag::tag_model::{Tag, TagDescription};

pub mod binding;
pub mod cli;
pub mod report;
pub mod tag;

/// Attribute that carries a view's resource id in layout markup.
pub const ID_ATTRIBUTE: &str = "android:id";

/// Result of one batch derivation pass over a document's tags.
#[derive(Debug)]
pub struct BindingBatch<'t> {
    pub elements: Vec<Element<'t>>,

    /// One record per tag that produced no element
    pub skipped: Vec<BindingError>,
}

/// Derive a binding for every tag that carries a parsable id attribute.
///
/// The prefix is snapshotted once for the whole batch. Tags without an id
/// attribute or with an unparsable one are recorded in `skipped`; they never
/// abort the run — the caller decides what to do with them.
pub fn derive_bindings<'t>(tags: &'t [TagDescription], prefix: &str) -> BindingBatch<'t> {
    let mut elements = Vec::new();
    let mut skipped = Vec::new();

    for tag in tags {
        match tag.attribute(ID_ATTRIBUTE) {
            Some(id_attribute) => match build_element(tag.name(), id_attribute, tag, prefix) {
                Ok(element) => elements.push(element),
                Err(err) => skipped.push(err),
            },
            None => skipped.push(BindingError::MissingIdAttribute {
                tag_name: tag.name().to_string(),
            }),
        }
    }

    BindingBatch { elements, skipped }
}
