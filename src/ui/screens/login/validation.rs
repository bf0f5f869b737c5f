//! Local identifier checks, run before any network call.

pub const MIN_IDENTIFIER_LEN: usize = 3;

pub fn is_valid_identifier(identifier: &str) -> bool {
    identifier_error(identifier).is_none()
}

/// First rule `identifier` breaks, as a user-facing message.
pub fn identifier_error(identifier: &str) -> Option<&'static str> {
    if identifier.trim().is_empty() {
        Some("Identifier cannot be empty")
    } else if identifier.chars().count() < MIN_IDENTIFIER_LEN {
        Some("Identifier must be at least 3 characters")
    } else if !identifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Some("Identifier may only contain letters, digits and underscores")
    } else {
        None
    }
}
