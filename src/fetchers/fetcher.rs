use std::future::Future;

/// Source of page bodies for a scan.
///
/// The pipeline only ever asks for a URL's body as text; implementors decide
/// how it is retrieved and what counts as a failure.
pub trait Fetcher {
    /// Failure reported when a body cannot be retrieved
    type Error: std::error::Error + Send + Sync + 'static;

    /// Retrieve the body at `url` as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
