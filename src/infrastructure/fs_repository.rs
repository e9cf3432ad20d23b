// Filesystem repository implementation and catalog reindexing
use crate::application::university_repository::{LoadError, UniversityRepository};
use crate::domain::slug::{is_valid_id, slugify};
use crate::domain::university::{Catalog, University};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data/universities";
const INDEX_FILE: &str = "index.json";

#[derive(Debug, Clone)]
pub struct FsUniversityRepository {
    data_dir: PathBuf,
}

/// Outcome of a reindex run.
#[derive(Debug, Default)]
pub struct ReindexReport {
    pub indexed: usize,
    pub skipped: Vec<PathBuf>,
}

impl FsUniversityRepository {
    /// `root` is the site root; records live under `root/data/universities/`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            data_dir: root.as_ref().join(DATA_DIR),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, LoadError> {
        let path = self.data_dir.join(file_name);
        let resource = path.display().to_string();

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound { resource });
            }
            Err(source) => return Err(LoadError::Io { resource, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse { resource, source })
    }

    /// Assign every detail record the slug of its name as `id` and rewrite
    /// `index.json` from the records, sorted by name.
    pub async fn reindex(&self) -> Result<ReindexReport> {
        let mut report = ReindexReport::default();
        let mut universities = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.data_dir)
            .await
            .with_context(|| format!("Failed to read {}", self.data_dir.display()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            let is_index = path.file_name().is_some_and(|name| name == INDEX_FILE);
            if is_json && !is_index {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            match Self::reindex_record(&path).await {
                Ok(university) => universities.push(university),
                Err(e) => {
                    tracing::error!("Error processing {}: {:#}", path.display(), e);
                    report.skipped.push(path);
                }
            }
        }

        universities.sort_by(|a, b| a.name.cmp(&b.name));
        let catalog = Catalog {
            universities: universities.iter().map(University::summary).collect(),
        };
        report.indexed = catalog.universities.len();

        let index_path = self.data_dir.join(INDEX_FILE);
        write_pretty_json(&index_path, &catalog).await?;
        tracing::info!("Updated {} ({} universities)", index_path.display(), report.indexed);

        Ok(report)
    }

    // Unknown fields in the record survive the rewrite.
    async fn reindex_record(path: &Path) -> Result<University> {
        let bytes = tokio::fs::read(path).await.context("Failed to read record")?;
        let mut raw: serde_json::Value = serde_json::from_slice(&bytes).context("Malformed JSON")?;

        let name = raw
            .get("name")
            .and_then(|name| name.as_str())
            .context("Record has no name")?;
        let id = slugify(name);

        if path.file_stem().is_some_and(|stem| stem.to_string_lossy() != id) {
            tracing::warn!(
                "{} holds id {:?}; it will only be reachable once renamed to {}.json",
                path.display(),
                id,
                id
            );
        }

        raw["id"] = serde_json::Value::String(id);
        let university: University =
            serde_json::from_value(raw.clone()).context("Record does not match the university schema")?;

        write_pretty_json(path, &raw).await?;
        Ok(university)
    }
}

async fn write_pretty_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[async_trait]
impl UniversityRepository for FsUniversityRepository {
    async fn load_catalog(&self) -> Result<Catalog, LoadError> {
        self.read_json(INDEX_FILE).await
    }

    async fn load_university(&self, id: &str) -> Result<University, LoadError> {
        if !is_valid_id(id) {
            return Err(LoadError::InvalidId(id.to_string()));
        }
        self.read_json(&format!("{id}.json")).await
    }
}
