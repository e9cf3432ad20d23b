// Current-logo resolution over a logo history
use super::university::LogoEntry;

pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

/// Order a logo history newest first.
///
/// At equal years an exact entry precedes an estimated one. The sort is
/// stable, so entries that still tie keep their stored order.
pub fn sort_logo_history(history: &[LogoEntry]) -> Vec<LogoEntry> {
    let mut sorted = history.to_vec();
    sorted.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| a.is_estimated.cmp(&b.is_estimated))
    });
    sorted
}

/// Head of the sorted history, if any.
pub fn current_logo(history: &[LogoEntry]) -> Option<&LogoEntry> {
    history.iter().reduce(|best, candidate| {
        let newer = candidate.year > best.year
            || (candidate.year == best.year && best.is_estimated && !candidate.is_estimated);
        if newer { candidate } else { best }
    })
}

/// Image reference of the current logo, or `placeholder` for an empty history.
pub fn resolve_current_logo(history: &[LogoEntry], placeholder: &str) -> String {
    current_logo(history)
        .map(|entry| entry.image_url.clone())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}
