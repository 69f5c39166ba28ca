// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Runtime(String),
}

/// Contract violations around the filter catalog.
///
/// These are caller errors, not runtime conditions: an unconstructable
/// effect is never reported here (it resolves to the fallback effect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A filter index outside `0..len` was selected.
    IndexOutOfRange { index: usize, len: usize },

    /// The catalog has no entries, or entry 0 is not the "no filter" sentinel.
    MissingSentinel,

    /// The sentinel name appears somewhere other than index 0.
    MisplacedSentinel { index: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::IndexOutOfRange { index, len } => {
                write!(f, "filter index {} out of range (catalog has {} entries)", index, len)
            }
            CatalogError::MissingSentinel => {
                write!(f, "catalog must start with the \"None\" entry")
            }
            CatalogError::MisplacedSentinel { index } => {
                write!(f, "\"None\" entry found at index {}, only index 0 is allowed", index)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Runtime(e) => write!(f, "Runtime Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<tokio::runtime::TryCurrentError> for Error {
    fn from(err: tokio::runtime::TryCurrentError) -> Self {
        Error::Runtime(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
