use crate::fetchers::Fetcher;
use reqwest::Client;

/// Fetches bodies over HTTP with a fixed user agent.
///
/// Redirects and timeouts follow reqwest's defaults. Any non-2xx status is
/// turned into an error.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher that sends `user_agent` with every request
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    type Error = reqwest::Error;

    async fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let start = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status();
        let body = response.text().await?;

        ::log::debug!(
            "{} answered {} with {} bytes in {:.2} seconds",
            url,
            status,
            body.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}
