//! Error types for homedeck.
//!
//! Each concern owns a small `thiserror` enum; [`HomedeckError`] wraps them
//! for callers that only need to report a failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::apps::{AnalyzeError, FormatError};
use crate::clipboard::ClipboardError;
use crate::comparison::CompareError;
use crate::config::ConfigError;
use crate::widgets::BookmarkError;

/// Failure reading or writing a persisted widget file (notes, bookmarks, prefs).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.into(),
            source,
        }
    }
}

/// Top-level error for the binary and for callers mixing several widgets.
#[derive(Error, Debug)]
pub enum HomedeckError {
    #[error(transparent)]
    Compare(#[from] CompareError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Bookmark(#[from] BookmarkError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = HomedeckError> = std::result::Result<T, E>;
