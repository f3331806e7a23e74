//! Error taxonomy for the cleaning pipeline.
//!
//! Only two fatal error families exist: the input cannot be loaded, or an
//! output cannot be written. Everything else (unparsable dates, all-missing
//! numeric columns) is absorbed into audit notes and never raised.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read the input file into a table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// File missing or unreadable.
    #[error("cannot read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File readable but not in the expected tabular format.
    #[error("malformed input file {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Failure to write the cleaned file or the report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteError {
    /// Destination path cannot be created or written.
    #[error("cannot write output file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
