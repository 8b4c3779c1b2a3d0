use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::EntryName;

/// Error type for corpus generation, archive IO, and table persistence failures.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A zip container could not be created, opened, or traversed.
    #[error("archive '{path}' failed: {reason}")]
    Archive {
        /// Archive the failure occurred in.
        path: PathBuf,
        /// Rendered underlying failure.
        reason: String,
    },
    /// One archive entry held bytes that do not parse as a document.
    #[error("entry '{entry}' failed to decode: {details}")]
    Decode {
        /// Entry name within its archive.
        entry: EntryName,
        /// What was malformed or missing.
        details: String,
    },
    /// Filesystem failure outside a container.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// XML reader or writer failure.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Delimited table serialization failure.
    #[error("table failure: {0}")]
    Table(#[from] csv::Error),
    /// A pipeline was invoked with unusable settings or targets.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CorpusError {
    /// Wrap a container-level failure with the archive path it occurred in.
    pub(crate) fn archive(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CorpusError::Archive {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a decode failure for a named archive entry.
    pub(crate) fn decode(entry: impl Into<EntryName>, details: impl ToString) -> Self {
        CorpusError::Decode {
            entry: entry.into(),
            details: details.to_string(),
        }
    }
}
