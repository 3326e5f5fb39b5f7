//! Whitespace normalization utilities.
//!
//! [`collapse_whitespace`] is the whitespace-only subset of
//! [`normalize`](crate::normalize): useful for display strings that should
//! keep their case and punctuation.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  Outlet\t\tInstallation \n"), "Outlet Installation");
//! ```

/// Collapses repeated Unicode whitespace into single ASCII spaces and trims
/// both ends. Whitespace-only input yields an empty string.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
