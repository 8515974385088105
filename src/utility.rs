//! Miscellaneous helpers.

/// Runs a producer and returns everything it writes.
///
/// The sink is owned by this call, so nothing is left behind if the
/// producer panics.
pub fn capture(producer: impl FnOnce(&mut String)) -> String {
    let mut output = String::new();
    producer(&mut output);
    output
}

/// Returns a `background-image` declaration for a `style` attribute.
///
/// An empty URL (after sanitization, if any) results in an empty string.
pub fn background_style(url: &str, sanitize: Option<&dyn Fn(&str) -> String>) -> String {
    let url = sanitize.map_or_else(|| url.to_owned(), |sanitize| sanitize(url));

    if url.is_empty() {
        String::new()
    } else {
        format!("background-image: url('{url}');")
    }
}
