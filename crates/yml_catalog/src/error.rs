//! Error types for catalog operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::validator::OfferViolation;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading or exporting a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unsupported definition format for file: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid catalog definition: {0}")]
    InvalidDefinition(String),

    #[error("Offer {id} is invalid: {violation}")]
    InvalidOffer { id: String, violation: OfferViolation },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error")]
    Toml(#[from] toml::de::Error),
}
