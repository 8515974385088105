use log::debug;

/// A tag selector, e.g. `div` or `div.container#main`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagSelector {
    tag: String,
    id: String,
    class: String,
}

impl TagSelector {
    /// Parses a tag selector.
    ///
    /// Only the tag name before the first `.` or `#` is extracted. Classes and
    /// an ID embedded in a selector are not supported yet and always come out
    /// empty.
    pub fn parse(selector: &str) -> Self {
        let tag = selector.split(['.', '#']).next().unwrap_or_default();

        if tag.len() != selector.len() {
            debug!("ignoring classes and ID in selector {selector:?}");
        }

        Self {
            tag: tag.to_owned(),
            id: String::new(),
            class: String::new(),
        }
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns an ID.
    #[allow(clippy::missing_const_for_fn)]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a space-separated class list.
    #[allow(clippy::missing_const_for_fn)]
    pub fn class(&self) -> &str {
        &self.class
    }
}
