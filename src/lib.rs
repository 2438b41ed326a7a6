// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScanConfig;
pub use error::ScanError;
pub use fetchers::{Fetcher, HttpFetcher};
pub use results::ScanReport;

/// Discovers the routes of a Next.js site from its `_buildManifest.js`.
///
/// The scan is strictly sequential: validate the address, fetch the home
/// page, locate the manifest reference, fetch the manifest, extract routes.
/// The first failing step ends the scan.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a new Scanner for the given target address
    pub fn new(target_url: &str) -> Self {
        Self {
            config: ScanConfig::new(target_url),
        }
    }

    /// Set the user agent sent with both requests
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ScanError> {
        let config = ScanConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Current configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the scan over HTTP
    pub async fn run(&self) -> Result<ScanReport, ScanError> {
        let fetcher = HttpFetcher::new(&self.config.user_agent).map_err(ScanError::HttpClient)?;
        self.run_with(&fetcher).await
    }

    /// Run the scan using the given fetcher for both requests
    pub async fn run_with<F: Fetcher>(&self, fetcher: &F) -> Result<ScanReport, ScanError> {
        let target_url = &self.config.target_url;

        if !utils::has_http_scheme(target_url) {
            ::log::warn!("Rejecting address without http(s) scheme: {}", target_url);
            return Err(ScanError::InvalidScheme);
        }

        ::log::info!("Fetching home page: {}", target_url);
        let page = fetcher
            .fetch(target_url)
            .await
            .map_err(|e| ScanError::PageFetch(Box::new(e)))?;

        let manifest_path =
            parsers::locate_build_manifest(&page).ok_or(ScanError::ManifestNotFound)?;
        let manifest_url = utils::manifest_url(target_url, manifest_path);

        ::log::info!("Fetching build manifest: {}", manifest_url);
        let manifest = fetcher
            .fetch(&manifest_url)
            .await
            .map_err(|e| ScanError::ManifestFetch(Box::new(e)))?;

        let routes = parsers::extract_routes(&manifest);
        ::log::info!("Found {} routes in {}", routes.len(), manifest_url);

        Ok(ScanReport::new(target_url.clone(), manifest_url, routes))
    }
}
