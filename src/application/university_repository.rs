// Repository trait for university data access
use crate::domain::university::{Catalog, University};
use async_trait::async_trait;
use thiserror::Error;

/// Failure to obtain a catalog or detail record.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid university id: {0:?}")]
    InvalidId(String),

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("request for {resource} failed with status {status}")]
    Status { resource: String, status: u16 },

    #[error("request for {resource} failed: {source}")]
    Transport {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The record does not exist, as opposed to the source being unreachable or broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::InvalidId(_) | LoadError::NotFound { .. })
    }
}

#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// Load the catalog (`index.json`)
    async fn load_catalog(&self) -> Result<Catalog, LoadError>;

    /// Load one detail record (`{id}.json`)
    async fn load_university(&self, id: &str) -> Result<University, LoadError>;
}
