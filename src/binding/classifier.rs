use crate::tag::tag_model::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionFlags {
    pub is_clickable: bool,
    pub is_editable: bool,
}

pub fn classify(tag: &dyn Tag) -> InteractionFlags {
    InteractionFlags {
        is_clickable: is_clickable(tag),
        is_editable: is_editable(tag),
    }
}

fn is_clickable(tag: &dyn Tag) -> bool {
    let name = tag.name();

    // RadioButton overrides the Button substring check
    if name.contains("RadioButton") {
        return false;
    }

    name.contains("Button") || tag.attribute("android:clickable") == Some("true")
}

fn is_editable(tag: &dyn Tag) -> bool {
    tag.name().contains("EditText")
}
