// Main entry point - Dependency injection and command dispatch
mod application;
mod cli;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;

use crate::application::catalog_controller::CatalogController;
use crate::application::page_generator::PageGenerator;
use crate::application::university_repository::UniversityRepository;
use crate::cli::{CliArgs, Command};
use crate::infrastructure::config::{load_wiki_config, DataSource, WikiConfig};
use crate::infrastructure::fs_repository::FsUniversityRepository;
use crate::infrastructure::http_repository::HttpUniversityRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = CliArgs::parse();
    let config = load_wiki_config(&args.config)?;

    match args.command {
        Command::Serve => serve(config).await,
        Command::Generate { ids } => generate(config, ids).await,
        Command::Reindex => reindex(config).await,
    }
}

fn build_repository(config: &WikiConfig) -> Arc<dyn UniversityRepository> {
    match config.data.source {
        DataSource::Http => Arc::new(HttpUniversityRepository::new(config.data.base_url.clone())),
        DataSource::Fs => Arc::new(FsUniversityRepository::new(&config.data.root)),
    }
}

async fn serve(config: WikiConfig) -> anyhow::Result<()> {
    let repository = build_repository(&config);
    let catalog = CatalogController::new(
        repository.clone(),
        config.site.placeholder_image.clone(),
        config.site.logo_concurrency,
    );

    // A failed warm-up is retried on the first request
    if catalog.refresh().await.is_err() {
        tracing::warn!("Catalog unavailable at startup");
    }

    let state = Arc::new(AppState {
        catalog,
        repository,
        search_debounce_ms: config.site.search_debounce_ms,
    });
    let router = build_router(state);

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid server.bind address {:?}", config.server.bind))?;
    tracing::info!("Starting logo-history-wiki on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

async fn generate(config: WikiConfig, ids: Vec<String>) -> anyhow::Result<()> {
    let generator = PageGenerator::new(build_repository(&config), config.site.output_dir.clone());

    let ids = if ids.is_empty() {
        generator
            .catalog_ids()
            .await
            .context("Failed to load the catalog for a full generation run")?
    } else {
        ids
    };

    let report = generator.generate_all(&ids).await;
    tracing::info!(
        "Generated {} pages, {} failed",
        report.generated.len(),
        report.failed.len()
    );
    if !report.failed.is_empty() {
        tracing::warn!("Failed ids: {}", report.failed.join(", "));
    }

    Ok(())
}

async fn reindex(config: WikiConfig) -> anyhow::Result<()> {
    if config.data.source != DataSource::Fs {
        anyhow::bail!("reindex needs data.source = \"fs\"");
    }

    let report = FsUniversityRepository::new(&config.data.root).reindex().await?;
    tracing::info!(
        "Indexed {} universities, skipped {} files",
        report.indexed,
        report.skipped.len()
    );

    Ok(())
}
