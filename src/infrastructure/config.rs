use crate::domain::logo::PLACEHOLDER_IMAGE;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct WikiConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Http,
    Fs,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub source: DataSource,
    /// Site root serving `data/universities/` over HTTP
    pub base_url: String,
    /// Local site root containing `data/universities/`
    pub root: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteSettings {
    pub output_dir: PathBuf,
    pub placeholder_image: String,
    pub search_debounce_ms: u64,
    pub logo_concurrency: usize,
}

/// Defaults, then the optional file at `path`, then `WIKI_*` environment variables.
pub fn load_wiki_config(path: &str) -> anyhow::Result<WikiConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("WIKI")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(builder
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("data.source", "fs")?
        .set_default("data.base_url", "http://localhost:8000/")?
        .set_default("data.root", ".")?
        .set_default("site.output_dir", "universities")?
        .set_default("site.placeholder_image", PLACEHOLDER_IMAGE)?
        .set_default("site.search_debounce_ms", 300)?
        .set_default("site.logo_concurrency", 8)?)
}
