//! Sanitization primitives for tags and attributes.

use serde_json::Value;

/// Elements rendered as `<tag />` when self-closing tags are enabled.
pub const SELF_CLOSING_ELEMENTS: &[&str] = &["input", "img", "hr", "br", "meta", "link"];

/// Removes every character that is not an ASCII letter.
pub fn sanitize_tag(tag: &str) -> String {
    tag.chars()
        .filter(char::is_ascii_alphabetic)
        .collect()
}

/// Removes every character not allowed in a class or ID token string.
///
/// ASCII letters, digits, `_`, `-`, and ASCII whitespace are kept.
pub fn sanitize_token(token: &str) -> String {
    token
        .chars()
        .filter(|character| is_name_character(*character) || is_whitespace(*character))
        .collect()
}

/// Removes every character not allowed in an attribute name.
///
/// ASCII letters, digits, `_`, and `-` are kept.
pub fn sanitize_attribute_name(name: &str) -> String {
    name.chars()
        .filter(|character| is_name_character(*character))
        .collect()
}

/// Returns `true` if a tag is one of the default self-closing elements.
pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_ELEMENTS.contains(&tag)
}

/// Encodes a value as JSON safe to be placed in a double-quoted attribute.
pub fn json_attribute_encode(value: &Value) -> String {
    escape_attribute(&value.to_string())
}

/// Escapes `&`, `<`, `>`, `"`, and `'` as HTML entities.
pub fn escape_attribute(string: &str) -> String {
    let mut escaped = String::with_capacity(string.len());

    for character in string.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(character),
        }
    }

    escaped
}

/// Escapes quotes, backslashes, and NUL characters with backslashes.
pub fn add_slashes(string: &str) -> String {
    let mut escaped = String::with_capacity(string.len());

    for character in string.chars() {
        match character {
            '\'' | '"' | '\\' => {
                escaped.push('\\');
                escaped.push(character);
            }
            '\0' => escaped.push_str("\\0"),
            _ => escaped.push(character),
        }
    }

    escaped
}

const fn is_name_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || matches!(character, '_' | '-')
}

// Vertical tabs count as whitespace unlike `char::is_ascii_whitespace`.
const fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("div", "div")]
    #[case("h1", "h")]
    #[case("div.container#main", "divcontainermain")]
    #[case("<script>", "script")]
    #[case("", "")]
    fn sanitize_tags(#[case] tag: &str, #[case] sanitized: &str) {
        assert_eq!(sanitize_tag(tag), sanitized);
    }

    #[rstest]
    #[case("foo bar", "foo bar")]
    #[case("foo_bar-1", "foo_bar-1")]
    #[case("a\tb\nc", "a\tb\nc")]
    #[case("foo\" onclick=\"alert(1)", "foo onclickalert1")]
    #[case("café", "caf")]
    fn sanitize_tokens(#[case] token: &str, #[case] sanitized: &str) {
        assert_eq!(sanitize_token(token), sanitized);
    }

    #[rstest]
    #[case("data-foo_bar", "data-foo_bar")]
    #[case("data foo", "datafoo")]
    #[case("on\"click", "onclick")]
    #[case("!@#", "")]
    fn sanitize_attribute_names(#[case] name: &str, #[case] sanitized: &str) {
        assert_eq!(sanitize_attribute_name(name), sanitized);
    }

    #[test]
    fn check_self_closing() {
        for tag in ["input", "img", "hr", "br", "meta", "link"] {
            assert!(is_self_closing(tag));
        }

        assert!(!is_self_closing("div"));
        assert!(!is_self_closing("IMG"));
        assert!(!is_self_closing(""));
    }

    #[test]
    fn encode_json_for_attribute() {
        let encoded = json_attribute_encode(&json!({"a": 1}));

        assert_eq!(encoded, "{&quot;a&quot;:1}");
        assert!(!encoded.contains('"'));
    }

    #[test]
    fn encode_html_in_json_for_attribute() {
        assert_eq!(
            json_attribute_encode(&json!(["<b>it's</b> & co"])),
            "[&quot;&lt;b&gt;it&#039;s&lt;/b&gt; &amp; co&quot;]"
        );
    }

    #[test]
    fn add_slashes_to_quotes() {
        assert_eq!(add_slashes(r#"it's "quoted" \ "#), r#"it\'s \"quoted\" \\ "#);
        assert_eq!(add_slashes("a\0b"), "a\\0b");
    }

    proptest! {
        #[test]
        fn sanitize_token_idempotently(token in any::<String>()) {
            let sanitized = sanitize_token(&token);

            prop_assert_eq!(sanitize_token(&sanitized), sanitized);
        }

        #[test]
        fn sanitize_attribute_name_without_quotes(name in any::<String>()) {
            prop_assert!(!sanitize_attribute_name(&name).contains(['"', '=', ' ']));
        }

        #[test]
        fn encode_json_without_quotes(string in any::<String>()) {
            let encoded = json_attribute_encode(&json!({ "key": string }));

            prop_assert!(!encoded.contains('"'));
        }
    }
}
