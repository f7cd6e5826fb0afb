//! Error type shared by the site crates.

/// Errors raised by form validation, remote submission and configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required form field was left empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A form field holds a malformed value.
    #[error("invalid value for field: {0}")]
    InvalidField(&'static str),

    /// The endpoint answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },

    /// The request never reached the endpoint.
    #[error("transport error: {0}")]
    Transport(String),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
