mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::read_config,
};
use crate::{globals::Globals, html::sanitize::SELF_CLOSING_ELEMENTS};
use core::ops::Deref;

/// A configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    html: HtmlConfig,
    globals: Globals,
}

impl Config {
    /// Creates a configuration.
    pub const fn new(html: HtmlConfig, globals: Globals) -> Self {
        Self { html, globals }
    }

    /// Returns an HTML configuration.
    pub const fn html(&self) -> &HtmlConfig {
        &self.html
    }

    /// Returns global values.
    pub const fn globals(&self) -> &Globals {
        &self.globals
    }
}

/// An HTML rendering configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HtmlConfig {
    self_closing_tags: bool,
    self_closing_elements: Vec<String>,
}

impl HtmlConfig {
    /// Creates an HTML configuration.
    pub const fn new(self_closing_tags: bool, self_closing_elements: Vec<String>) -> Self {
        Self {
            self_closing_tags,
            self_closing_elements,
        }
    }

    /// Returns whether self-closing elements are rendered as `<tag />`.
    pub const fn self_closing_tags(&self) -> bool {
        self.self_closing_tags
    }

    /// Returns self-closing element names.
    pub fn self_closing_elements(&self) -> impl Iterator<Item = &str> {
        self.self_closing_elements.iter().map(Deref::deref)
    }

    /// Sets whether self-closing elements are rendered as `<tag />`.
    pub fn set_self_closing_tags(mut self, self_closing_tags: bool) -> Self {
        self.self_closing_tags = self_closing_tags;
        self
    }

    /// Sets self-closing element names.
    pub fn set_self_closing_elements(
        mut self,
        elements: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.self_closing_elements = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the configuration.
    ///
    /// Every self-closing element name must be a non-empty sequence of ASCII
    /// letters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in self.self_closing_elements() {
            if name.is_empty() || !name.chars().all(|character| character.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidSelfClosingElement(name.to_owned()));
            }
        }

        Ok(())
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self::new(
            true,
            SELF_CLOSING_ELEMENTS
                .iter()
                .copied()
                .map(ToOwned::to_owned)
                .collect(),
        )
    }
}
