//! Prefix and suffix helpers.
//!
//! `trim_*` removes an affix once if present and `ensure_*` adds it only if absent, so both
//! are no-ops on input that is already in the desired shape. An empty affix is always a no-op.

use std::borrow::Cow;

/// Removes `prefix` from the start of `string` once, if present.
pub fn trim_prefix<'a>(string: &'a str, prefix: &str) -> &'a str {
    string.strip_prefix(prefix).unwrap_or(string)
}

/// Prepends `prefix` to `string` unless it already starts with it.
pub fn ensure_prefix<'a>(string: &'a str, prefix: &str) -> Cow<'a, str> {
    if string.starts_with(prefix) {
        return Cow::Borrowed(string);
    }
    Cow::Owned(format!("{prefix}{string}"))
}

/// Removes `suffix` from the end of `string` once, if present.
pub fn trim_suffix<'a>(string: &'a str, suffix: &str) -> &'a str {
    string.strip_suffix(suffix).unwrap_or(string)
}

/// Appends `suffix` to `string` unless it already ends with it.
pub fn ensure_suffix<'a>(string: &'a str, suffix: &str) -> Cow<'a, str> {
    if string.ends_with(suffix) {
        return Cow::Borrowed(string);
    }
    Cow::Owned(format!("{string}{suffix}"))
}
