//! Shared string utilities.

/// Fold `_x` pairs into `X` (e.g., "created_at_utc" -> "createdAtUtc").
///
/// Only an underscore followed by a lowercase ASCII letter is folded; every
/// other character, including the remaining underscores, is kept as is.
pub fn snake_to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(next)) if next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

/// Check that a name is non-empty and made of ASCII letters, digits and underscores.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
