use std::path::Path;

use thiserror::Error;

/// Main error type for the recommender
#[derive(Error, Debug)]
pub enum RecommenderError {
    /// Dataset missing, unreadable or malformed
    #[error("Failed to load dataset '{path}': {message}")]
    DataLoad { path: String, message: String },

    /// Reference game not present in the dataset
    #[error("{}", not_found_message(.name, .suggestions))]
    NotFound { name: String, suggestions: Vec<String> },

    /// Rejected user input (attribute names, price, rating, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading answers or writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn not_found_message(name: &str, suggestions: &[String]) -> String {
    let mut msg = format!(
        "Game not found: '{}'. Names must match exactly, check spelling, capitalization and symbols",
        name
    );
    if !suggestions.is_empty() {
        msg.push_str(&format!(" (did you mean: {}?)", suggestions.join(", ")));
    }
    msg
}

impl RecommenderError {
    /// Build a `DataLoad` error for the given dataset path
    pub fn data_load(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        RecommenderError::DataLoad {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    /// Build a `NotFound` error without suggestions
    pub fn not_found(name: impl Into<String>) -> Self {
        RecommenderError::NotFound {
            name: name.into(),
            suggestions: Vec::new(),
        }
    }

    /// Whether this error ends the run. Only rejected input is re-asked.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RecommenderError::InvalidInput(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, RecommenderError>;
