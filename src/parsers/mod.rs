//! Pattern extraction over fetched text.
//!
//! Two narrow regexes cover everything the pipeline needs: one finds the
//! `_buildManifest.js` reference in the home page, the other pulls route
//! literals out of the manifest.

pub mod manifest;
pub mod routes;

#[cfg(test)]
mod tests;

pub use manifest::locate_build_manifest;
pub use routes::extract_routes;
