use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A double-quoted literal starting with `/`, e.g. `"/blog/[slug]"`
static ROUTE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(/[a-zA-Z0-9_/\[\]\.-]+)""#).expect("valid regex"));

/// Extracts the unique route paths from build manifest source, quotes stripped
pub fn extract_routes(manifest: &str) -> HashSet<String> {
    let routes: HashSet<String> = ROUTE_LITERAL
        .captures_iter(manifest)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    ::log::debug!("Manifest parser found {} unique routes", routes.len());
    routes
}
