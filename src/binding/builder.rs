use crate::binding::binding_model::Element;
use crate::binding::classifier::classify;
use crate::binding::error::BindingError;
use crate::binding::field_name::generate_field_name;
use crate::binding::identifier::parse_id_attribute;
use crate::tag::tag_model::Tag;

/// Build an `Element` from a raw view-type name and its id attribute.
///
/// Every derived value is computed in a pure step first and the element is
/// assembled last, so a failed id parse leaves nothing behind. The field-name
/// prefix is an explicit parameter; callers snapshot it before a batch run.
pub fn build_element<'t>(
    type_name: &str,
    id_attribute: &str,
    tag: &'t dyn Tag,
    prefix: &str,
) -> Result<Element<'t>, BindingError> {
    let parsed = parse_id_attribute(id_attribute)?;

    let (type_name_full, simple_name) = split_type_name(type_name);
    let field_name = generate_field_name(&parsed.raw_id, prefix);
    let flags = classify(tag);

    Ok(Element {
        raw_id: parsed.raw_id,
        is_platform_ns: parsed.is_platform_ns,
        type_name_full,
        type_name: simple_name,
        field_name,
        is_valid: false,
        is_used: true,
        is_clickable: flags.is_clickable,
        is_editable: flags.is_editable,
        tag,
    })
}

fn split_type_name(type_name: &str) -> (Option<String>, String) {
    match type_name.rsplit_once('.') {
        Some((_, simple)) => (Some(type_name.to_string()), simple.to_string()),
        None => (None, type_name.to_string()),
    }
}
