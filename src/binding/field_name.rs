/// Convert a bare resource id into a language-safe field name.
///
/// The id is split on `_`, empty tokens are dropped (consecutive underscores
/// produce no casing artifacts), a token carrying `.`-separated segments keeps
/// only its last non-empty segment, and each retained token has its first character
/// uppercased — except the very first one when the prefix is empty, so an
/// unprefixed name starts in the id's own case.
pub fn generate_field_name(raw_id: &str, prefix: &str) -> String {
    let mut name = String::from(prefix);
    let mut first_token = true;

    for token in raw_id.split('_') {
        if token.is_empty() {
            continue;
        }

        // Last non-empty dot segment; a trailing dot contributes no empty word
        let word = token.rsplit('.').find(|s| !s.is_empty()).unwrap_or("");

        if first_token && prefix.is_empty() {
            name.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(head) = chars.next() {
                name.extend(head.to_uppercase());
                name.push_str(chars.as_str());
            }
        }

        first_token = false;
    }

    name
}
