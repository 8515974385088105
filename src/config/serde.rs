use super::{ConfigError, HtmlConfig};
use crate::globals::Globals;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A serializable configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    extend: Option<PathBuf>,
    self_closing_tags: Option<bool>,
    self_closing_elements: Option<Vec<String>>,
    globals: Option<Globals>,
}

impl SerializableConfig {
    /// Returns a configuration file path to extend from.
    pub fn extend(&self) -> Option<&Path> {
        self.extend.as_deref()
    }

    /// Merges another configuration extending this one.
    ///
    /// The `extend` field of the other configuration is dropped as it points
    /// back to this one.
    pub fn merge(&mut self, other: Self) {
        if other.self_closing_tags.is_some() {
            self.self_closing_tags = other.self_closing_tags;
        }

        if other.self_closing_elements.is_some() {
            self.self_closing_elements = other.self_closing_elements;
        }

        if let Some(other) = other.globals {
            if let Some(globals) = &mut self.globals {
                globals.merge(other);
            } else {
                self.globals = Some(other);
            }
        }
    }
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<super::Config, ConfigError> {
    let mut html = HtmlConfig::default();

    if let Some(self_closing_tags) = config.self_closing_tags {
        html = html.set_self_closing_tags(self_closing_tags);
    }

    if let Some(elements) = config.self_closing_elements {
        html = html.set_self_closing_elements(elements);
    }

    html.validate()?;

    Ok(super::Config::new(html, config.globals.unwrap_or_default()))
}
