use std::path::PathBuf;

use url::Url;

use crate::error::{config::ConfigError, BridgeError};

pub struct Config {
    /// Base URL of the remote backend, e.g. `https://project.supabase.co`.
    pub backend_url: Url,
    /// Anonymous API key sent as the bearer credential on every request.
    pub backend_api_key: String,
    /// Directory for the local document cache; `None` disables caching.
    pub document_cache_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, BridgeError> {
        let raw_url = std::env::var("BACKEND_URL")
            .map_err(|_| ConfigError::MissingEnvVar("BACKEND_URL".to_string()))?;
        let backend_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidBackendUrl {
            value: raw_url,
            source,
        })?;

        Ok(Self {
            backend_url,
            backend_api_key: std::env::var("BACKEND_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("BACKEND_API_KEY".to_string()))?,
            document_cache_dir: std::env::var("DOCUMENT_CACHE_DIR").ok().map(PathBuf::from),
        })
    }

    /// Builds a config directly, for hosts that wire their own settings.
    pub fn new(backend_url: Url, backend_api_key: impl Into<String>) -> Self {
        Self {
            backend_url,
            backend_api_key: backend_api_key.into(),
            document_cache_dir: None,
        }
    }

    pub fn with_document_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.document_cache_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests building a config from explicit values.
    ///
    /// Expected: Ok with the given URL and key, cache disabled
    #[test]
    fn builds_config_from_values() {
        let url = Url::parse("https://backend.example.com").unwrap();
        let config = Config::new(url.clone(), "anon-key");

        assert_eq!(config.backend_url, url);
        assert_eq!(config.backend_api_key, "anon-key");
        assert!(config.document_cache_dir.is_none());
    }

    /// Tests enabling the document cache directory.
    ///
    /// Expected: Ok with the cache directory set
    #[test]
    fn enables_document_cache() {
        let url = Url::parse("https://backend.example.com").unwrap();
        let config = Config::new(url, "anon-key").with_document_cache_dir("/tmp/docs");

        assert_eq!(config.document_cache_dir, Some(PathBuf::from("/tmp/docs")));
    }
}
