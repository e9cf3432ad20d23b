// Application state for HTTP handlers
use crate::application::catalog_controller::CatalogController;
use crate::application::university_repository::UniversityRepository;
use std::sync::Arc;

pub struct AppState {
    pub catalog: CatalogController,
    pub repository: Arc<dyn UniversityRepository>,
    pub search_debounce_ms: u64,
}
