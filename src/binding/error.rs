use std::fmt;

#[derive(Debug)]
pub enum BindingError {
    /// The id attribute does not match the `@[+][ns:]id/name` pattern
    InvalidIdentifier { attribute: String },

    /// The tag carries no id attribute at all (raised by the batch layer,
    /// never by element construction itself)
    MissingIdAttribute { tag_name: String },
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::InvalidIdentifier { attribute } => {
                write!(f, "Invalid format of view id '{}'", attribute)
            }
            BindingError::MissingIdAttribute { tag_name } => {
                write!(f, "Tag '{}' has no id attribute", tag_name)
            }
        }
    }
}

impl std::error::Error for BindingError {}
