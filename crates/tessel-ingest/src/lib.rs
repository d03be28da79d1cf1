//! Reading shapes from line-oriented text files.
//!
//! This crate sits outside the Tessel core. It owns everything about the
//! on-disk format: comment handling ([`reader`]), record layouts and
//! validation ([`parse`]), and file loading with per-record error
//! recovery ([`loader`]). A malformed record is a [`RecordError`]; the
//! loader logs it and carries on. Only an unreadable file or an invalid
//! [`IngestConfig`] stops a load.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod loader;
pub mod parse;
pub mod reader;

pub use config::{ConfigError, IngestConfig};
pub use error::{IngestError, RecordError};
pub use loader::{load_file, load_str, LoadReport, Loader};
pub use reader::Record;
