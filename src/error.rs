use thiserror::Error;

/// Errors that can occur while loading recipes or running the menu
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to read the data file or talk to the console
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Data file is not valid JSON
    #[error("Failed to parse recipe data: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Data file is valid JSON but not a recipe collection
    #[error("Invalid recipe data: {0}")]
    DataError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
