/// Returns true if the address carries an `http://` or `https://` prefix
pub fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Builds the manifest address by appending the located path to the target.
///
/// Plain concatenation: a trailing slash on the target is kept as is.
pub fn manifest_url(target_url: &str, manifest_path: &str) -> String {
    format!("{target_url}{manifest_path}")
}
