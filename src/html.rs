//! HTML element rendering.
//!
//! [`HtmlBuilder::element`] sanitizes a tag, attributes, and inner HTML
//! before rendering an element. [`HtmlBuilder::element_strict`] trusts its
//! input and only assembles a string.

mod attribute;
mod content;
pub mod normalize;
pub mod sanitize;
mod selector;

pub use self::{
    attribute::{AttributeMap, AttributeValue, Attributes, StrictAttributes, StrictValue},
    content::Inner,
    selector::TagSelector,
};
use self::{
    normalize::{merge_attribute, normalize_attribute_value},
    sanitize::{sanitize_attribute_name, sanitize_tag},
};
use crate::config::{ConfigError, HtmlConfig};
use core::convert::identity;
use itertools::{Either, Itertools};
use log::{debug, trace};

/// An HTML element builder.
#[derive(Clone, Debug, Default)]
pub struct HtmlBuilder {
    config: HtmlConfig,
}

impl HtmlBuilder {
    /// Creates an HTML element builder.
    pub fn new(config: HtmlConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Returns a configuration.
    pub const fn config(&self) -> &HtmlConfig {
        &self.config
    }

    /// Returns `true` if an element is rendered as `<tag />`.
    pub fn is_self_closing(&self, tag: &str) -> bool {
        self.config.self_closing_tags()
            && self
                .config
                .self_closing_elements()
                .any(|element| element == tag)
    }

    /// Renders an element after sanitizing all of its parts.
    ///
    /// A selector's classes and ID are merged into attributes, although
    /// only its tag name is currently parsed. Attribute values are
    /// normalized by [`normalize_attribute_value`] under sanitized names,
    /// and attributes whose names are sanitized away are dropped.
    pub fn element<'a>(
        &self,
        selector: &str,
        inner: impl Into<Inner<'a>>,
        mut attributes: Attributes,
        close: bool,
    ) -> String {
        let selector = TagSelector::parse(selector);

        merge_attribute("class", selector.class().into(), &mut attributes);
        merge_attribute("id", selector.id().into(), &mut attributes);

        let attributes = attributes
            .into_iter()
            .filter_map(|(name, value)| {
                let sanitized_name = sanitize_attribute_name(&name);

                if sanitized_name.is_empty() {
                    debug!("dropping attribute with invalid name {name:?}");
                    return None;
                }

                normalize_attribute_value(&name, value).map(|value| (sanitized_name, value))
            })
            .collect::<StrictAttributes>();

        self.element_strict(
            &sanitize_tag(selector.tag()),
            &inner.into().resolve(),
            &attributes,
            close,
        )
    }

    /// Renders an element from sanitized parts.
    ///
    /// Bare attributes with `true` values come after the others. Self-closing
    /// elements ignore `inner` and `close`.
    pub fn element_strict(
        &self,
        tag: &str,
        inner: &str,
        attributes: &StrictAttributes,
        close: bool,
    ) -> String {
        let (pairs, singles): (Vec<_>, Vec<_>) = attributes
            .iter()
            .filter_map(|(name, value)| match value {
                StrictValue::Text(text) => Some(Either::Left(format!("{name}=\"{text}\""))),
                StrictValue::Flag(true) if !name.is_empty() => {
                    Some(Either::Right(name.to_owned()))
                }
                StrictValue::Flag(_) => None,
            })
            .partition_map(identity);
        let attributes = pairs.into_iter().chain(singles).join(" ");

        let mut element = format!("<{tag}");

        if !attributes.is_empty() {
            element.push(' ');
            element.push_str(&attributes);
        }

        if self.is_self_closing(tag) {
            element.push_str(" />");
        } else {
            element.push('>');
            element.push_str(inner);

            if close {
                element.push_str(&format!("</{tag}>"));
            }
        }

        trace!("rendered element {element}");

        element
    }
}
