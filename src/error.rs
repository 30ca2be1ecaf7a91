//! Error types for folio.
//!
//! In-band display failures (unparseable media URLs, unknown carousel ids,
//! too-few-items carousels) degrade silently and are logged where they
//! occur; the variants here cover the out-of-band failures that should
//! abort or surface: manifest loading and terminal setup.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type FolioResult<T> = Result<T, FolioError>;

/// Unified error type for folio operations.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("failed to read manifest {path}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("terminal error")]
    Terminal(#[from] std::io::Error),
}
