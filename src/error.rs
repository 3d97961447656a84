//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("{0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    /// Fold any failure from the remote call or payload decoding into a
    /// generation error, keeping the underlying message.
    pub fn into_generation(self) -> Self {
        match self {
            Error::Generation(_) | Error::EmptyPrompt => self,
            other => Error::Generation(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
