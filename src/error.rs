use thiserror::Error;

/// Errors that can occur while suggesting or fetching recipes
#[derive(Error, Debug)]
pub enum PantryError {
    /// Neither ingredients nor a recipe name were supplied
    #[error("Invalid request")]
    InvalidRequest,

    /// The language model call failed (network, auth, quota, malformed response)
    #[error("Failed to generate recipe: {0}")]
    GenerationFailed(String),

    /// A session selection referred to a suggestion that is not listed
    #[error("No suggestion with id {0}")]
    UnknownSuggestion(u32),

    /// A session call was started while another one is still outstanding
    #[error("A request is already in progress")]
    Busy,

    /// Provider could not be constructed from configuration
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to bind or serve the HTTP listener
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
