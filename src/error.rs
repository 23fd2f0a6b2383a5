//! Error types for the gridq crate

use thiserror::Error;

/// Main error type for the gridq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("could not place the rover on a free cell after {attempts} attempts")]
    EnvironmentUnplaceable { attempts: usize },

    #[error("rover has not been placed; call reset first")]
    RoverNotPlaced,

    #[error("invalid character '{character}' at row {row}, column {column} in grid layout")]
    InvalidLayoutCell {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("invalid grid layout: {message}")]
    InvalidLayout { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
