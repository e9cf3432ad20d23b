// HTML rendering for the index grid and the per-university pages
use crate::domain::logo::sort_logo_history;
use crate::domain::university::{CatalogCard, LogoEntry, University};

const FOOTER: &str = "© 2024 University Logo History Wiki";

/// Everything the index page needs besides the cards themselves.
pub struct IndexView<'a> {
    pub cards: &'a [&'a CatalogCard],
    pub countries: &'a [String],
    pub search: &'a str,
    pub country: &'a str,
    pub placeholder: &'a str,
    pub debounce_ms: u64,
}

/// Standalone logo-history page for the page id `id`, as written to `universities/{id}.html`
pub fn render_university_page(id: &str, university: &University) -> String {
    let id = urlencoding::encode(id);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - Logo History</title>
    <link rel="stylesheet" href="../styles.css">
    <link rel="stylesheet" href="../university.css">
</head>
<body>
    <header>
        <h1>{name}</h1>
        <p>Logo History and Evolution</p>
    </header>

    <main class="university-page">
        <div class="navigation-buttons">
            <a href="../index.html" class="nav-button">← Back to Universities</a>
            <a href="../edit.html?id={id}" class="nav-button">Edit Entry</a>
        </div>

        <div class="university-info">
            <h2>University Information</h2>
            <div class="info-grid">
                <div class="info-item">
                    <h3>Location</h3>
                    <p>{location}</p>
                </div>
                <div class="info-item">
                    <h3>Founded</h3>
                    <p>{founded}</p>
                </div>
            </div>
        </div>

        <div class="logo-history">
            <h2>Logo History</h2>
{entries}
        </div>
    </main>

    <footer>
        <p>{footer}</p>
    </footer>
</body>
</html>
"#,
        name = html_escape(&university.name),
        id = html_escape(&id),
        location = html_escape(&university.location.display()),
        founded = university.founded,
        entries = render_logo_history(university),
        footer = FOOTER,
    )
}

/// Every logo entry, newest first.
pub fn render_logo_history(university: &University) -> String {
    sort_logo_history(&university.logo_history)
        .iter()
        .map(|logo| render_logo_entry(&university.name, logo))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_logo_entry(name: &str, logo: &LogoEntry) -> String {
    let mut badges = String::new();
    if logo.is_estimated {
        badges.push_str(r#" <span class="estimated-date">(estimated)</span>"#);
    }
    if logo.is_current {
        badges.push_str(r#" <span class="current-logo">(Current)</span>"#);
    }

    let source = logo
        .source
        .as_ref()
        .map(|source| {
            format!(
                r#"
                    <a href="{url}" target="_blank" class="source-link" rel="noopener noreferrer">Source: {title}</a>"#,
                url = html_escape(&source.url),
                title = html_escape(&source.title),
            )
        })
        .unwrap_or_default();

    format!(
        r#"            <div class="logo-entry">
                <img src="{image}" alt="{name} logo from {year}" class="logo-image">
                <div class="logo-details">
                    <h3>{year}{badges}</h3>
                    <p>{description}</p>{source}
                </div>
            </div>"#,
        image = html_escape(&logo.image_url),
        name = html_escape(name),
        year = logo.year,
        badges = badges,
        description = html_escape(&logo.description),
        source = source,
    )
}

/// Landing page: search box, country select and the pre-filtered grid.
pub fn render_index_page(view: &IndexView<'_>) -> String {
    let options = view
        .countries
        .iter()
        .map(|country| {
            let selected = if country == view.country { " selected" } else { "" };
            format!(
                r#"                    <option value="{value}"{selected}>{value}</option>"#,
                value = html_escape(country),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>University Logo History Wiki</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <header>
        <h1>University Logo History Wiki</h1>
    </header>

    <main>
        <form class="search-container" id="filterForm" action="index.html" method="get">
            <input type="text" name="q" class="search-input" placeholder="Search universities..." value="{search}">
            <div class="country-filter">
                <select id="countryFilter" name="country">
                    <option value="">All Countries</option>
{options}
                </select>
            </div>
        </form>
        <div id="universitiesGrid" class="universities-grid">
{grid}
        </div>
    </main>

    <footer>
        <p>{footer}</p>
    </footer>
{script}
</body>
</html>
"#,
        search = html_escape(view.search),
        options = options,
        grid = render_grid(view.cards, view.placeholder),
        footer = FOOTER,
        script = grid_script(view.debounce_ms),
    )
}

/// Inner HTML of `#universitiesGrid`.
pub fn render_grid(cards: &[&CatalogCard], placeholder: &str) -> String {
    if cards.is_empty() {
        return r#"<div class="no-results">No universities match your search.</div>"#.to_string();
    }

    cards
        .iter()
        .map(|card| render_card(card, placeholder))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(card: &CatalogCard, placeholder: &str) -> String {
    let university = &card.university;
    let href = format!("universities/{}.html", urlencoding::encode(&university.id));

    format!(
        r#"<div class="university-card" data-href="{href}" onclick="window.location.href=this.dataset.href">
    <img src="{logo}" alt="{name} logo" onerror="this.onerror=null;this.src='{placeholder}'">
    <div class="university-card-content">
        <h2>{name}</h2>
        <p>Founded: {founded}</p>
        <p>{location}</p>
    </div>
</div>"#,
        href = html_escape(&href),
        logo = html_escape(&card.current_logo),
        name = html_escape(&university.name),
        placeholder = html_escape(placeholder),
        founded = university.founded,
        location = html_escape(&university.location.display()),
    )
}

/// Shown in place of `<main>` content when the catalog cannot be loaded.
pub fn render_error_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>University Logo History Wiki</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <main>
        <div class="error-container">
            <h2>Error Loading Universities</h2>
            <p>There was a problem loading the university data. Please try again later.</p>
            <button onclick="location.reload()" class="retry-button">Retry</button>
        </div>
    </main>

    <footer>
        <p>{footer}</p>
    </footer>
</body>
</html>
"#,
        footer = FOOTER,
    )
}

// Debounced search, immediate country changes. Responses from an older pass
// are dropped so a slow fetch never overwrites a newer grid.
fn grid_script(debounce_ms: u64) -> String {
    format!(
        r#"    <script>
    (function () {{
        var form = document.getElementById('filterForm');
        var input = form.querySelector('.search-input');
        var select = document.getElementById('countryFilter');
        var grid = document.getElementById('universitiesGrid');
        var pass = 0;
        var timeout;

        function refresh() {{
            var current = ++pass;
            var params = new URLSearchParams({{ q: input.value, country: select.value }});
            fetch('fragments/grid?' + params.toString())
                .then(function (response) {{
                    if (!response.ok) {{ throw new Error('HTTP error! status: ' + response.status); }}
                    return response.text();
                }})
                .then(function (html) {{
                    if (current === pass) {{ grid.innerHTML = html; }}
                }})
                .catch(function (error) {{ console.error('Error filtering universities:', error); }});
        }}

        form.addEventListener('submit', function (event) {{ event.preventDefault(); refresh(); }});
        input.addEventListener('input', function () {{
            clearTimeout(timeout);
            timeout = setTimeout(refresh, {debounce_ms});
        }});
        select.addEventListener('change', refresh);
    }})();
    </script>"#,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
