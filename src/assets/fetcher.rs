/// Asset fetchers
///
/// A fetcher turns an asset location such as `/assets/sounds/correct/a.mp3`
/// into bytes. Any failure means "this asset does not exist" to the caller.
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AssetError;

/// Source of raw asset bytes
pub trait AssetFetcher {
    /// Fetch the asset at `location`
    fn fetch(&self, location: &str) -> Result<Vec<u8>, AssetError>;
}

impl<F: AssetFetcher + ?Sized> AssetFetcher for &F {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, AssetError> {
        (**self).fetch(location)
    }
}

/// Fetches assets over HTTP GET
pub struct HttpFetcher {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher rooted at `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(&format!("quiz-feedback/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    /// Full URL for a location
    pub fn url_for(&self, location: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            location.trim_start_matches('/')
        )
    }
}

impl AssetFetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, AssetError> {
        let url = self.url_for(location);

        let response = match self.agent.get(&url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, _)) => {
                return Err(AssetError::BadStatus {
                    location: location.to_string(),
                    status,
                });
            }
            Err(e) => {
                return Err(AssetError::FetchFailed {
                    location: location.to_string(),
                    source: Box::new(e),
                });
            }
        };

        // ureq only hands 1xx/3xx through here
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(AssetError::BadStatus {
                location: location.to_string(),
                status,
            });
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|source| AssetError::ReadFailed {
                location: location.to_string(),
                source,
            })?;

        Ok(body)
    }
}

/// Reads assets from a local directory
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Create a fetcher that resolves locations below `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem path for a location
    pub fn path_for(&self, location: &str) -> PathBuf {
        self.root.join(location.trim_start_matches('/'))
    }
}

impl AssetFetcher for DirFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, AssetError> {
        std::fs::read(self.path_for(location)).map_err(|source| AssetError::ReadFailed {
            location: location.to_string(),
            source,
        })
    }
}
