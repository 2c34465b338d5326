//! HTML fragments written into the search and notification containers.
//!
//! Rows and buttons carry `data-` attributes; the page wires them with
//! delegated listeners instead of inline handlers.

use history::RecentSearches;

pub const NO_RECENT_SEARCHES: &str = r#"<div class="no-recent">No recent searches</div>"#;
pub const NO_NOTIFICATIONS: &str = r#"<div class="no-notifications">No notifications</div>"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn recent_searches(searches: &RecentSearches) -> String {
    if searches.is_empty() {
        return NO_RECENT_SEARCHES.to_string();
    }
    searches
        .iter()
        .map(|term| {
            let term = escape_html(term);
            format!(r#"<div class="recent-item" data-term="{term}">{term}</div>"#)
        })
        .collect()
}

pub fn search_results(term: &str) -> String {
    let term = escape_html(term);
    format!(
        concat!(
            r#"<div class="search-results-content">"#,
            r#"<h4>Search Results for "{term}"</h4>"#,
            r#"<div class="result-item">"#,
            r#"<h5>Location: {term}</h5>"#,
            r#"<p>Weather data and flood risk information for {term}</p>"#,
            r#"<button class="view-details-btn" data-location="{term}">View Details</button>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        term = term
    )
}
