// Search and country filtering over the catalog
use super::university::UniversitySummary;
use std::collections::BTreeSet;

/// Filter parameters as typed into the search box and country select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    search: String,
    country: String,
}

impl CatalogFilter {
    pub fn new(search: &str, country: &str) -> Self {
        Self {
            search: search.to_lowercase(),
            country: country.to_string(),
        }
    }

    /// Case-insensitive substring on name, city or country, AND an exact
    /// (case-sensitive) country match when a country is selected.
    pub fn matches(&self, university: &UniversitySummary) -> bool {
        let matches_search = self.search.is_empty()
            || university.name.to_lowercase().contains(&self.search)
            || university.location.city.to_lowercase().contains(&self.search)
            || university.location.country.to_lowercase().contains(&self.search);

        let matches_country = self.country.is_empty() || university.location.country == self.country;

        matches_search && matches_country
    }
}

/// Subsequence of `catalog` matching `criteria`, in catalog order.
pub fn filter<'a, T>(catalog: &'a [T], criteria: &CatalogFilter) -> Vec<&'a T>
where
    T: AsRef<UniversitySummary>,
{
    catalog
        .iter()
        .filter(|entry| criteria.matches((*entry).as_ref()))
        .collect()
}

/// Sorted, de-duplicated countries for the country select.
pub fn unique_countries<'a, I>(universities: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a UniversitySummary>,
{
    universities
        .into_iter()
        .map(|u| u.location.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::university::Location;

    fn university(id: &str, name: &str, city: &str, country: &str) -> UniversitySummary {
        UniversitySummary {
            id: id.to_string(),
            name: name.to_string(),
            founded: 1900,
            location: Location {
                city: city.to_string(),
                country: country.to_string(),
            },
        }
    }

    fn catalog() -> Vec<UniversitySummary> {
        vec![
            university("acme-u", "Acme U", "Metropolis", "Wakanda"),
            university("best-college", "Best College", "Gotham", "Wakanda"),
            university("north-tech", "North Tech", "Springfield", "Freedonia"),
        ]
    }

    fn names(catalog: &[UniversitySummary], search: &str, country: &str) -> Vec<String> {
        filter(catalog, &CatalogFilter::new(search, country))
            .into_iter()
            .map(|u| u.name.clone())
            .collect()
    }

    #[test]
    fn test_empty_filter_returns_full_catalog_in_order() {
        let catalog = catalog();
        let result: Vec<UniversitySummary> = filter(&catalog, &CatalogFilter::default())
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_search_matches_city_case_insensitively() {
        assert_eq!(names(&catalog(), "metro", ""), vec!["Acme U"]);
        assert_eq!(names(&catalog(), "METRO", ""), vec!["Acme U"]);
    }

    #[test]
    fn test_search_matches_name_and_country() {
        assert_eq!(names(&catalog(), "college", ""), vec!["Best College"]);
        assert_eq!(names(&catalog(), "freedon", ""), vec!["North Tech"]);
    }

    #[test]
    fn test_country_is_exact_and_case_sensitive() {
        assert_eq!(names(&catalog(), "", "Wakanda"), vec!["Acme U", "Best College"]);
        assert!(names(&catalog(), "", "wakanda").is_empty());
        assert!(names(&catalog(), "", "Wakand").is_empty());
    }

    #[test]
    fn test_search_and_country_combine() {
        assert!(names(&catalog(), "gotham", "Freedonia").is_empty());
        assert_eq!(names(&catalog(), "gotham", "Wakanda"), vec!["Best College"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let criteria = CatalogFilter::new("a", "Wakanda");
        let catalog = catalog();
        let once: Vec<UniversitySummary> = filter(&catalog, &criteria).into_iter().cloned().collect();
        let twice: Vec<UniversitySummary> = filter(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unique_countries_sorted() {
        assert_eq!(unique_countries(&catalog()), vec!["Freedonia", "Wakanda"]);
    }
}
