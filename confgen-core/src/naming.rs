//! Identifier case helpers.
//!
//! Only the first character of an identifier is ever touched: the rest is
//! copied verbatim, including any multi-byte characters.

/// Upper-case the first character (e.g., "size" -> "Size").
///
/// Returns `None` for an empty string.
pub fn capitalize(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// Lower-case the first character (e.g., "ErrorHandling" -> "errorHandling").
///
/// Returns `None` for an empty string.
pub fn decapitalize(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

/// Prepend the capitalized `prefix` to `name` (e.g., ("app", "Config") -> "AppConfig").
///
/// An empty prefix leaves `name` unchanged.
pub fn apply_prefix(prefix: &str, name: &str) -> String {
    match capitalize(prefix) {
        Some(prefix) => format!("{}{}", prefix, name),
        None => name.to_string(),
    }
}
