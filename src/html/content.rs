use crate::utility::capture;

type Producer<'a> = Box<dyn FnOnce(&mut String) -> Option<String> + 'a>;

/// Inner HTML of an element.
pub enum Inner<'a> {
    /// Literal HTML.
    Text(String),
    /// A producer writing HTML into a sink and optionally returning more.
    Producer(Producer<'a>),
}

impl<'a> Inner<'a> {
    /// Creates inner HTML from a producer.
    pub fn producer(producer: impl FnOnce(&mut String) -> Option<String> + 'a) -> Self {
        Self::Producer(Box::new(producer))
    }

    /// Resolves inner HTML into a string.
    ///
    /// A producer's return value comes first and its written output follows.
    /// Text is returned verbatim and never invoked as a producer, except that
    /// falsy text like `0` becomes empty.
    pub fn resolve(self) -> String {
        match self {
            Self::Text(text) if text == "0" => String::new(),
            Self::Text(text) => text,
            Self::Producer(producer) => {
                let mut returned = None;
                let written = capture(|output| returned = producer(output));

                returned.unwrap_or_default() + &written
            }
        }
    }
}

impl Default for Inner<'_> {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Inner<'_> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Inner<'_> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
