// src/fetch/source.rs

use std::{fmt, path::PathBuf};
use url::Url;

use crate::error::LoadError;

/// Where the booth CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    File(PathBuf),
}

impl Source {
    /// Resolve a source reference the way a page resolves a relative fetch.
    ///
    /// Absolute `http(s)` and `file` URLs are taken as-is. Anything else is a
    /// relative reference: joined onto `base` when one is given, otherwise
    /// treated as a local path.
    pub fn resolve(reference: &str, base: Option<&Url>) -> Result<Self, LoadError> {
        let invalid = |reason: String| LoadError::InvalidSource {
            reference: reference.to_string(),
            reason,
        };

        if let Ok(url) = Url::parse(reference) {
            if matches!(url.scheme(), "http" | "https" | "file") {
                return Self::from_url(url).map_err(invalid);
            }
        }

        match base {
            Some(base) => {
                let joined = base.join(reference).map_err(|e| invalid(e.to_string()))?;
                Self::from_url(joined).map_err(invalid)
            }
            None => Ok(Source::File(PathBuf::from(reference))),
        }
    }

    fn from_url(url: Url) -> Result<Self, String> {
        match url.scheme() {
            "http" | "https" => Ok(Source::Url(url)),
            "file" => url
                .to_file_path()
                .map(Source::File)
                .map_err(|_| format!("{} is not a local path", url)),
            other => Err(format!("unsupported scheme {:?}", other)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
