// Catalog controller - Owns the catalog snapshot backing the grid
use crate::application::university_repository::{LoadError, UniversityRepository};
use crate::domain::filter::{filter, unique_countries, CatalogFilter};
use crate::domain::logo::resolve_current_logo;
use crate::domain::university::{CatalogCard, UniversitySummary};
use futures::StreamExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    /// Refresh pass that produced this snapshot
    pub pass: u64,
    pub cards: Vec<CatalogCard>,
}

impl CatalogSnapshot {
    pub fn filter(&self, criteria: &CatalogFilter) -> Vec<&CatalogCard> {
        filter(&self.cards, criteria)
    }

    pub fn countries(&self) -> Vec<String> {
        unique_countries(self.cards.iter().map(|card| &card.university))
    }
}

pub struct CatalogController {
    repository: Arc<dyn UniversityRepository>,
    placeholder: String,
    logo_concurrency: usize,
    passes: AtomicU64,
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
    cold_load: Mutex<()>,
}

impl CatalogController {
    pub fn new(
        repository: Arc<dyn UniversityRepository>,
        placeholder: String,
        logo_concurrency: usize,
    ) -> Self {
        Self {
            repository,
            placeholder,
            logo_concurrency: logo_concurrency.max(1),
            passes: AtomicU64::new(0),
            current: RwLock::new(None),
            cold_load: Mutex::new(()),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Installed snapshot, loading one first if there is none yet.
    ///
    /// Concurrent callers share a single cold load.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, LoadError> {
        if let Some(snapshot) = self.installed().await {
            return Ok(snapshot);
        }

        let _cold_load = self.cold_load.lock().await;
        if let Some(snapshot) = self.installed().await {
            return Ok(snapshot);
        }
        self.refresh().await
    }

    async fn installed(&self) -> Option<Arc<CatalogSnapshot>> {
        self.current.read().await.clone()
    }

    /// Load the catalog and resolve every card's logo.
    ///
    /// The result is installed unless a later pass has already installed
    /// its own snapshot; either way it is returned to the caller.
    pub async fn refresh(&self) -> Result<Arc<CatalogSnapshot>, LoadError> {
        let pass = self.passes.fetch_add(1, Ordering::SeqCst) + 1;

        let catalog = self.repository.load_catalog().await.inspect_err(|e| {
            tracing::error!("Error loading universities (pass {}): {}", pass, e);
        })?;
        tracing::debug!("Pass {}: catalog has {} universities", pass, catalog.universities.len());

        let cards = self.resolve_cards(catalog.universities).await;
        let snapshot = Arc::new(CatalogSnapshot { pass, cards });

        if self.install(snapshot.clone()).await {
            tracing::info!("Installed catalog snapshot {} ({} cards)", pass, snapshot.cards.len());
        } else {
            tracing::debug!("Catalog pass {} superseded, snapshot discarded", pass);
        }

        Ok(snapshot)
    }

    async fn install(&self, snapshot: Arc<CatalogSnapshot>) -> bool {
        let mut current = self.current.write().await;
        match current.as_ref() {
            Some(existing) if existing.pass > snapshot.pass => false,
            _ => {
                *current = Some(snapshot);
                true
            }
        }
    }

    // Detail records are fetched concurrently, bounded, and collected in catalog order.
    async fn resolve_cards(&self, universities: Vec<UniversitySummary>) -> Vec<CatalogCard> {
        futures::stream::iter(universities)
            .map(|university| async move {
                let current_logo = self.resolve_logo(&university.id).await;
                CatalogCard {
                    university,
                    current_logo,
                }
            })
            .buffered(self.logo_concurrency)
            .collect()
            .await
    }

    async fn resolve_logo(&self, id: &str) -> String {
        match self.repository.load_university(id).await {
            Ok(university) => resolve_current_logo(&university.logo_history, &self.placeholder),
            Err(e) => {
                tracing::warn!("Error getting current logo for {}: {}", id, e);
                self.placeholder.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{sample_repository, InMemoryRepository};
    use crate::domain::logo::PLACEHOLDER_IMAGE;

    fn controller(repository: InMemoryRepository) -> CatalogController {
        CatalogController::new(Arc::new(repository), PLACEHOLDER_IMAGE.to_string(), 4)
    }

    #[tokio::test]
    async fn test_refresh_resolves_logos_in_catalog_order() {
        let controller = controller(sample_repository());
        let snapshot = controller.refresh().await.unwrap();

        let ids: Vec<_> = snapshot.cards.iter().map(|c| c.university.id.as_str()).collect();
        assert_eq!(ids, vec!["acme-u", "best-college"]);
        assert_eq!(snapshot.cards[0].current_logo, "images/acme-u/2000.png");
        // empty history
        assert_eq!(snapshot.cards[1].current_logo, PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn test_missing_detail_record_degrades_to_placeholder() {
        let controller = controller(sample_repository().without_detail("acme-u"));
        let snapshot = controller.refresh().await.unwrap();

        assert_eq!(snapshot.cards.len(), 2);
        assert_eq!(snapshot.cards[0].current_logo, PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn test_catalog_failure_is_surfaced_and_nothing_installed() {
        let controller = controller(InMemoryRepository::unavailable());

        assert!(matches!(controller.refresh().await, Err(LoadError::Status { status: 503, .. })));
        assert!(controller.current.read().await.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_loads_once_then_reuses() {
        let repository = Arc::new(sample_repository());
        let controller = CatalogController::new(repository.clone(), PLACEHOLDER_IMAGE.to_string(), 2);

        let first = controller.snapshot().await.unwrap();
        let second = controller.snapshot().await.unwrap();

        assert_eq!(first.pass, second.pass);
        assert_eq!(repository.detail_loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_superseded_pass_does_not_replace_newer_snapshot() {
        let controller = controller(sample_repository());
        let newer = Arc::new(CatalogSnapshot { pass: 2, cards: vec![] });
        let older = Arc::new(CatalogSnapshot { pass: 1, cards: vec![] });

        assert!(controller.install(newer).await);
        assert!(!controller.install(older).await);
        assert_eq!(controller.snapshot().await.unwrap().pass, 2);
    }

    #[tokio::test]
    async fn test_concurrent_cold_snapshots_load_once() {
        let repository = Arc::new(sample_repository());
        let controller = CatalogController::new(repository.clone(), PLACEHOLDER_IMAGE.to_string(), 2);

        let (a, b, c) = tokio::join!(controller.snapshot(), controller.snapshot(), controller.snapshot());

        assert_eq!(a.unwrap().pass, 1);
        assert_eq!(b.unwrap().pass, 1);
        assert_eq!(c.unwrap().pass, 1);
        assert_eq!(repository.catalog_loads.load(Ordering::SeqCst), 1);
        assert_eq!(repository.detail_loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_cold_load_is_retried_by_next_caller() {
        let repository = Arc::new(InMemoryRepository::unavailable());
        let controller = CatalogController::new(repository.clone(), PLACEHOLDER_IMAGE.to_string(), 2);

        assert!(controller.snapshot().await.is_err());
        assert!(controller.snapshot().await.is_err());
        assert_eq!(repository.catalog_loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_later_refresh_replaces_snapshot() {
        let controller = controller(sample_repository());
        controller.refresh().await.unwrap();
        controller.refresh().await.unwrap();

        assert_eq!(controller.snapshot().await.unwrap().pass, 2);
    }

    #[tokio::test]
    async fn test_snapshot_filter_and_countries() {
        let controller = controller(sample_repository());
        let snapshot = controller.refresh().await.unwrap();

        let matches = snapshot.filter(&CatalogFilter::new("metro", ""));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].university.name, "Acme U");
        assert_eq!(snapshot.filter(&CatalogFilter::new("", "Wakanda")).len(), 2);
        assert_eq!(snapshot.countries(), vec!["Wakanda"]);
    }
}
