//! Record-level and file-level ingestion errors.

use crate::config::ConfigError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use tessel_core::{ShapeError, ShapeKind};

/// A single malformed record.
///
/// Every variant is invalid data: the loader logs the record and moves on.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordError {
    /// Fewer fields than the shape needs.
    TooFewFields {
        /// Kind the record was parsed as.
        kind: ShapeKind,
        /// Minimum number of fields.
        expected: usize,
        /// Fields present.
        found: usize,
    },
    /// A field is not a number.
    NotANumber {
        /// Zero-based field index.
        index: usize,
        /// The offending text.
        text: String,
    },
    /// Rectangle with zero width or height.
    Degenerate {
        /// Absolute x extent.
        width: f64,
        /// Absolute y extent.
        height: f64,
    },
    /// The shape constructor rejected the parsed values.
    Shape(ShapeError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields {
                kind,
                expected,
                found,
            } => write!(
                f,
                "not enough data for a {kind}: need {expected} fields, found {found}"
            ),
            Self::NotANumber { index, text } => {
                write!(f, "field {index} is not a number: '{text}'")
            }
            Self::Degenerate { width, height } => write!(
                f,
                "rectangle width and height must be positive, got {width} x {height}"
            ),
            Self::Shape(e) => write!(f, "{e}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for RecordError {
    fn from(e: ShapeError) -> Self {
        Self::Shape(e)
    }
}

/// Errors that abort a load.
#[derive(Debug)]
pub enum IngestError {
    /// A data file could not be read.
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The ingestion configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Config(e) => write!(f, "invalid ingest config: {e}"),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<ConfigError> for IngestError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
