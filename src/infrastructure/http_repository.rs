// HTTP repository implementation
use crate::application::university_repository::{LoadError, UniversityRepository};
use crate::domain::slug::is_valid_id;
use crate::domain::university::{Catalog, University};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpUniversityRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUniversityRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, LoadError> {
        let url = self.build_url(resource);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                resource: resource.to_string(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound {
                resource: resource.to_string(),
            });
        }
        if !status.is_success() {
            return Err(LoadError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Transport {
            resource: resource.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| LoadError::Parse {
            resource: resource.to_string(),
            source,
        })
    }
}

#[async_trait]
impl UniversityRepository for HttpUniversityRepository {
    async fn load_catalog(&self) -> Result<Catalog, LoadError> {
        self.fetch_json("data/universities/index.json").await
    }

    async fn load_university(&self, id: &str) -> Result<University, LoadError> {
        if !is_valid_id(id) {
            return Err(LoadError::InvalidId(id.to_string()));
        }
        let resource = format!("data/universities/{}.json", urlencoding::encode(id));
        self.fetch_json(&resource).await
    }
}
