//! Naming transforms shared by every generator.
//!
//! All functions are total: an empty input yields an empty output.

/// Uppercase the first character, leaving the rest untouched (e.g., "viewCount" -> "ViewCount")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character if it is uppercase (e.g., "ViewCount" -> "viewCount")
pub fn decapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => c.to_lowercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}

/// Convert a string to underscore separated lower case (e.g., "viewCount" -> "view_count").
///
/// Non-alphanumeric characters split the input into segments and are dropped.
/// Inside a segment every character that lowercasing changes, other than the
/// first, starts a new word. The output is a fixed point: converting it again
/// returns it unchanged.
pub fn to_separator_case(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(|segment| split_words(&decapitalize_first(segment)))
        .collect::<Vec<_>>()
        .join("_")
}

fn split_words(segment: &str) -> String {
    let mut result = String::with_capacity(segment.len() + 4);
    for c in segment.chars() {
        let changed = c.to_lowercase().ne(std::iter::once(c));
        if changed && !result.is_empty() {
            result.push('_');
        }
        // Lowercasing may yield combining marks (e.g., 'İ' -> "i\u{307}").
        result.extend(c.to_lowercase().filter(|l| l.is_alphanumeric()));
    }
    result
}

/// Naive plural used for table names (e.g., "post" -> "posts").
///
/// Irregular plurals are not handled: "category" becomes "categorys".
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    format!("{}s", s)
}
