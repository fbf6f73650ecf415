// src/fetch/mod.rs

use async_trait::async_trait;
use reqwest::Client;

use crate::error::LoadError;

pub mod http;
pub mod source;

pub use http::{build_client, get_text, read_file};
pub use source::Source;

/// Anything that can hand the pipeline one blob of CSV text.
#[async_trait]
pub trait FetchText: Send + Sync {
    async fn fetch_text(&self) -> Result<String, LoadError>;
}

/// Loads a single [`Source`], over HTTP or from disk. One call, no retries.
pub struct Loader {
    client: Client,
    source: Source,
}

impl Loader {
    pub fn new(client: Client, source: Source) -> Self {
        Self { client, source }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }
}

#[async_trait]
impl FetchText for Loader {
    async fn fetch_text(&self) -> Result<String, LoadError> {
        match &self.source {
            Source::Url(url) => get_text(&self.client, url).await,
            Source::File(path) => read_file(path).await,
        }
    }
}
