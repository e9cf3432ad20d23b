// Page generator - Writes one standalone logo-history page per university
use crate::application::university_repository::{LoadError, UniversityRepository};
use crate::infrastructure::html_render::render_university_page;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a batch run; one failed id never stops the others.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<PathBuf>,
    pub failed: Vec<String>,
}

#[derive(Clone)]
pub struct PageGenerator {
    repository: Arc<dyn UniversityRepository>,
    output_dir: PathBuf,
}

impl PageGenerator {
    pub fn new(repository: Arc<dyn UniversityRepository>, output_dir: PathBuf) -> Self {
        Self {
            repository,
            output_dir,
        }
    }

    /// Render the page for `id` into `{output_dir}/{id}.html`, replacing any previous file.
    pub async fn generate(&self, id: &str) -> Result<PathBuf, GenerateError> {
        let university = self.repository.load_university(id).await?;
        let page = render_university_page(id, &university);

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| GenerateError::Write {
                path: self.output_dir.clone(),
                source,
            })?;

        let path = self.output_dir.join(format!("{id}.html"));
        tokio::fs::write(&path, page)
            .await
            .map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!("Generated page for {} at {}", university.name, path.display());
        Ok(path)
    }

    /// Like [`generate`](Self::generate), but a failure is logged and yields `None`.
    pub async fn generate_logged(&self, id: &str) -> Option<PathBuf> {
        match self.generate(id).await {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::error!("Error generating page for {}: {}", id, e);
                None
            }
        }
    }

    pub async fn generate_all(&self, ids: &[String]) -> GenerationReport {
        let mut report = GenerationReport::default();
        for id in ids {
            match self.generate_logged(id).await {
                Some(path) => report.generated.push(path),
                None => report.failed.push(id.clone()),
            }
        }
        report
    }

    /// Every id listed in the catalog.
    pub async fn catalog_ids(&self) -> Result<Vec<String>, LoadError> {
        let catalog = self.repository.load_catalog().await?;
        Ok(catalog.universities.into_iter().map(|u| u.id).collect())
    }
}
