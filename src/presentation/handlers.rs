// HTTP request handlers
use crate::domain::filter::CatalogFilter;
use crate::domain::university::CatalogCard;
use crate::infrastructure::html_render::{
    render_error_page, render_grid, render_index_page, render_university_page, IndexView,
};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub country: String,
}

impl FilterQuery {
    fn criteria(&self) -> CatalogFilter {
        CatalogFilter::new(&self.q, &self.country)
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Index page with the grid pre-filtered from the query string.
/// Each page view reloads the catalog; fragments and the API reuse that snapshot.
pub async fn index_page(
    Query(query): Query<FilterQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let snapshot = match state.catalog.refresh().await {
        Ok(snapshot) => snapshot,
        Err(_) => return (StatusCode::BAD_GATEWAY, Html(render_error_page())).into_response(),
    };

    let cards = snapshot.filter(&query.criteria());
    let countries = snapshot.countries();
    let page = render_index_page(&IndexView {
        cards: &cards,
        countries: &countries,
        search: &query.q,
        country: &query.country,
        placeholder: state.catalog.placeholder(),
        debounce_ms: state.search_debounce_ms,
    });

    Html(page).into_response()
}

/// Inner HTML of the grid, swapped in by the index page's script
pub async fn grid_fragment(
    Query(query): Query<FilterQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.catalog.snapshot().await {
        Ok(snapshot) => {
            let cards = snapshot.filter(&query.criteria());
            tracing::debug!("Grid fragment for {:?}: {} cards", query, cards.len());
            Html(render_grid(&cards, state.catalog.placeholder())).into_response()
        }
        Err(_) => (StatusCode::BAD_GATEWAY, "Error loading universities").into_response(),
    }
}

/// Filtered catalog as JSON
pub async fn list_universities(
    Query(query): Query<FilterQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CatalogCard>>, StatusCode> {
    let snapshot = state
        .catalog
        .snapshot()
        .await
        .map_err(|_| StatusCode::BAD_GATEWAY)?;

    Ok(Json(
        snapshot
            .filter(&query.criteria())
            .into_iter()
            .cloned()
            .collect(),
    ))
}

/// Detail page rendered on request, same markup as the generated file
pub async fn university_page(
    Path(page): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(id) = page.strip_suffix(".html") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.repository.load_university(id).await {
        Ok(university) => Html(render_university_page(id, &university)).into_response(),
        Err(e) if e.is_not_found() => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Error loading university {}: {}", id, e);
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
