use regex::Regex;
use std::sync::LazyLock;

/// `/_next/static/<build id>/_buildManifest.js`
static BUILD_MANIFEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)/_next/static/[\w-]+/_buildManifest\.js").expect("valid regex")
});

/// Finds the build manifest path referenced by a page.
///
/// Only the first reference is returned; a page may point at several static
/// chunks but the first manifest is the one the scan follows.
pub fn locate_build_manifest(page: &str) -> Option<&str> {
    let found = BUILD_MANIFEST.find(page).map(|m| m.as_str());
    match found {
        Some(path) => ::log::debug!("Located build manifest at {}", path),
        None => ::log::debug!("No build manifest reference in {} bytes of page", page.len()),
    }
    found
}
