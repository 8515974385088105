//! String helpers.

use regex::Regex;
use std::sync::LazyLock;

static SLUG_INVALID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("valid slug pattern"));
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static DASHES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("-+").expect("valid dash pattern"));

/// Returns `true` for non-empty strings containing only ASCII digits.
pub fn is_integer(string: &str) -> bool {
    !string.is_empty() && string.bytes().all(|byte| byte.is_ascii_digit())
}

/// Removes everything but ASCII letters and digits, and optionally underscores.
pub fn make_alphanumeric(string: &str, allow_underscores: bool) -> String {
    string
        .chars()
        .filter(|character| {
            character.is_ascii_alphanumeric() || allow_underscores && *character == '_'
        })
        .collect()
}

/// Removes everything but ASCII digits, and optionally dots.
pub fn strip_non_numeric(string: &str, allow_dots: bool) -> String {
    string
        .chars()
        .filter(|character| character.is_ascii_digit() || allow_dots && *character == '.')
        .collect()
}

/// Strips a prefix if a string starts with it.
pub fn strip_prefix<'a>(string: &'a str, prefix: &str) -> &'a str {
    string.strip_prefix(prefix).unwrap_or(string)
}

/// Strips a suffix if a string ends with it.
pub fn strip_suffix<'a>(string: &'a str, suffix: &str) -> &'a str {
    string.strip_suffix(suffix).unwrap_or(string)
}

/// Returns `true` if stripping a suffix changes a string.
pub fn ends_with(string: &str, suffix: &str) -> bool {
    strip_suffix(string, suffix).len() != string.len()
}

/// Converts a string into a lowercase slug separated by dashes.
pub fn slugify(string: &str, allow_underscore: bool) -> String {
    let string = string.trim().to_lowercase();
    let string = SLUG_INVALID_PATTERN.replace_all(&string, "");
    let string = if allow_underscore {
        string
    } else {
        string.replace('_', "-").into()
    };
    let string = WHITESPACE_PATTERN.replace_all(&string, "-");

    DASHES_PATTERN.replace_all(&string, "-").into_owned()
}
