// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while getting the booth CSV text.
///
/// Malformed CSV is not in here: parsing never fails, it only yields
/// partially filled or empty records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered, but not with a success status.
    #[error("HTTP error! status: {status} ({url})")]
    Fetch { url: String, status: u16 },

    /// The request itself failed (unreachable host, timeout, broken body).
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot resolve source {reference:?}: {reason}")]
    InvalidSource { reference: String, reason: String },
}

impl LoadError {
    /// HTTP status code, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}
