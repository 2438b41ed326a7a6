use thiserror::Error;

/// Boxed error produced by a [`crate::fetchers::Fetcher`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Reasons a scan stops before producing a route list.
///
/// The `Display` text of each variant is the diagnostic printed by the CLI.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Target address does not start with `http://` or `https://`
    #[error("Please include the protocol (http:// or https://) in the URL.")]
    InvalidScheme,

    /// The home page could not be fetched (transport error or non-2xx status)
    #[error("Error when accessing the URL: {}", with_causes(.0))]
    PageFetch(#[source] BoxError),

    /// No `_buildManifest.js` reference in the page
    #[error("_buildManifest.js wasn't found. Is this site really running Next.js?")]
    ManifestNotFound,

    /// The manifest itself could not be fetched
    #[error("Error accessing buildManifest content: {}", with_causes(.0))]
    ManifestFetch(#[source] BoxError),

    /// The HTTP client could not be built
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Invalid JSON handed to [`crate::Scanner::with_config_str`]
    #[error("Invalid scan configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Error message followed by each distinct cause, separated by `: `
fn with_causes(err: &BoxError) -> String {
    let err: &(dyn std::error::Error + 'static) = &**err;
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
