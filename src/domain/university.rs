// University domain model
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn display(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Catalog entry backing one card of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversitySummary {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "year_from_number_or_string")]
    pub founded: i32,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSource {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoEntry {
    #[serde(deserialize_with = "year_from_number_or_string")]
    pub year: i32,
    #[serde(default)]
    pub is_estimated: bool,
    #[serde(default)]
    pub is_current: bool,
    #[serde(alias = "image", default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: Option<LogoSource>,
}

/// Full detail record, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "year_from_number_or_string")]
    pub founded: i32,
    pub location: Location,
    #[serde(default)]
    pub logo_history: Vec<LogoEntry>,
}

impl University {
    pub fn summary(&self) -> UniversitySummary {
        UniversitySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            founded: self.founded,
            location: self.location.clone(),
        }
    }
}

/// Wire shape of `index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub universities: Vec<UniversitySummary>,
}

/// One grid card: a catalog entry and its resolved current logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogCard {
    #[serde(flatten)]
    pub university: UniversitySummary,
    pub current_logo: String,
}

impl AsRef<UniversitySummary> for UniversitySummary {
    fn as_ref(&self) -> &UniversitySummary {
        self
    }
}

impl AsRef<UniversitySummary> for CatalogCard {
    fn as_ref(&self) -> &UniversitySummary {
        &self.university
    }
}

// Some records store years as strings ("1891"); both forms are accepted.
fn year_from_number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i32),
        Text(String),
    }

    match RawYear::deserialize(deserializer)? {
        RawYear::Number(year) => Ok(year),
        RawYear::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid year: {text:?}"))),
    }
}
