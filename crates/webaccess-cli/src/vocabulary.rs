//! Vocabulary files mapping identifiers to labels.
//!
//! A vocabulary file is a JSON array of `{"id": 9, "label": "button"}`
//! objects. Entry order is kept: it decides which identifier a label
//! resolves to when two entries share a label.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use webaccess_expr::LabelTable;

/// Failure to load a vocabulary file.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The file could not be read.
    #[error("failed to read vocabulary {}: {source}", .path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not a JSON array of entries.
    #[error("invalid vocabulary {}: {source}", .path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Load the label table stored at `path`.
///
/// # Errors
///
/// Returns [`VocabularyError::Read`] when the file cannot be read and
/// [`VocabularyError::Parse`] when it is not valid.
pub fn load_vocabulary(path: &Path) -> Result<LabelTable, VocabularyError> {
    let text = fs::read_to_string(path).map_err(|source| VocabularyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table: LabelTable =
        serde_json::from_str(&text).map_err(|source| VocabularyError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), entries = table.len(), "loaded vocabulary");
    Ok(table)
}
