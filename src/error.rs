// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Catalog(String),
    Locale(String),
    /// A message key had no entry in the requested locale or the default
    /// locale. Carries the key path and every locale that was consulted.
    MissingMessage {
        key: String,
        locales: Vec<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
            Error::MissingMessage { key, locales } => {
                write!(
                    f,
                    "Missing message '{}' (tried locales: {})",
                    key,
                    locales.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
