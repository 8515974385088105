use core::{
    error::Error,
    fmt,
    fmt::{Display, Formatter},
};
use std::{io, path::PathBuf};

/// A configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// Circular configuration extensions.
    CircularConfigFiles(Vec<PathBuf>),
    /// An invalid self-closing element name.
    InvalidSelfClosingElement(String),
    /// An I/O error while reading configuration.
    Io(io::Error),
    /// A TOML deserialization error.
    TomlDeserialize(::toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::CircularConfigFiles(paths) => {
                let paths = paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                write!(formatter, "circular configuration files: {paths}")
            }
            Self::InvalidSelfClosingElement(name) => {
                write!(formatter, "invalid self-closing element: {name:?}")
            }
            Self::Io(error) => {
                write!(formatter, "{error}")
            }
            Self::TomlDeserialize(error) => {
                write!(formatter, "{error}")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<::toml::de::Error> for ConfigError {
    fn from(error: ::toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}
