use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bridge requires this environment variable to be defined. Check the
    /// host's deployment configuration for required variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `BACKEND_URL` is set but does not parse as an absolute URL.
    #[error("Invalid backend URL '{value}': {source}")]
    InvalidBackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
