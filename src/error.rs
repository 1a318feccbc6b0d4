use thiserror::Error;

/// Errors that can occur during recipe search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query itself was unusable, checked before any lookup is issued
    #[error("Invalid search: {0}")]
    InvalidCriteria(String),

    /// A directory lookup failed at the transport level
    #[error("Failed to reach the recipe directory: {0}")]
    Transport(#[from] reqwest::Error),

    /// A newer search started on the same finder while this one was in flight
    #[error("Search superseded by a newer one")]
    Superseded,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
