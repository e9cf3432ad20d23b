// In-memory repository shared by the test modules
use crate::application::university_repository::{LoadError, UniversityRepository};
use crate::domain::university::{Catalog, Location, LogoEntry, LogoSource, University};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct InMemoryRepository {
    catalog: Option<Catalog>,
    universities: HashMap<String, University>,
    pub catalog_loads: AtomicUsize,
    pub detail_loads: AtomicUsize,
}

impl InMemoryRepository {
    /// Catalog listing every record, in the given order.
    pub fn with_universities(universities: Vec<University>) -> Self {
        let catalog = Catalog {
            universities: universities.iter().map(University::summary).collect(),
        };
        Self {
            catalog: Some(catalog),
            universities: universities.into_iter().map(|u| (u.id.clone(), u)).collect(),
            ..Self::default()
        }
    }

    /// Every load fails.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Serve `university` under `id` regardless of its stored id.
    pub fn with_record(mut self, id: &str, university: University) -> Self {
        self.universities.insert(id.to_string(), university);
        self
    }

    /// Keep the catalog entry but drop the detail record.
    pub fn without_detail(mut self, id: &str) -> Self {
        self.universities.remove(id);
        self
    }
}

#[async_trait]
impl UniversityRepository for InMemoryRepository {
    async fn load_catalog(&self) -> Result<Catalog, LoadError> {
        self.catalog_loads.fetch_add(1, Ordering::SeqCst);
        // Suspend like a real fetch so concurrent callers interleave
        tokio::task::yield_now().await;
        self.catalog.clone().ok_or_else(|| LoadError::Status {
            resource: "data/universities/index.json".to_string(),
            status: 503,
        })
    }

    async fn load_university(&self, id: &str) -> Result<University, LoadError> {
        self.detail_loads.fetch_add(1, Ordering::SeqCst);
        self.universities
            .get(id)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                resource: format!("data/universities/{id}.json"),
            })
    }
}

pub fn logo(year: i32, is_estimated: bool, image_url: &str, description: &str) -> LogoEntry {
    LogoEntry {
        year,
        is_estimated,
        is_current: false,
        image_url: image_url.to_string(),
        description: description.to_string(),
        source: Some(LogoSource {
            url: format!("https://archive.example.org/{year}"),
            title: format!("Archive {year}"),
        }),
    }
}

pub fn university(id: &str, name: &str, city: &str, country: &str, logos: Vec<LogoEntry>) -> University {
    University {
        id: id.to_string(),
        name: name.to_string(),
        founded: 1901,
        location: Location {
            city: city.to_string(),
            country: country.to_string(),
        },
        logo_history: logos,
    }
}

/// "Acme U" (Metropolis) and "Best College" (Gotham), both in Wakanda.
pub fn sample_repository() -> InMemoryRepository {
    InMemoryRepository::with_universities(vec![
        university(
            "acme-u",
            "Acme U",
            "Metropolis",
            "Wakanda",
            vec![
                logo(2000, true, "images/acme-u/2000e.png", "Estimated redesign"),
                logo(2000, false, "images/acme-u/2000.png", "Modern crest"),
                logo(1995, false, "images/acme-u/1995.png", "Original seal"),
            ],
        ),
        university("best-college", "Best College", "Gotham", "Wakanda", vec![]),
    ])
}
