//! Scholar-Harvest: a literature discovery pipeline
//!
//! This crate implements a single forward-only pipeline: query a scholarly
//! search API for a topic, enrich each open-access result with a canonical
//! source link and PDF link scraped from its landing page, optionally download
//! the PDFs, write a semicolon-delimited CSV report, and optionally email the
//! bundled output directory as a zip attachment.

pub mod config;
pub mod download;
pub mod enrich;
pub mod model;
pub mod notify;
pub mod output;
pub mod search;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Scholar-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Search API returned HTTP {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("Failed to decode search response: {0}")]
    ApiDecode(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    Email(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("SMTP credentials not set (expected LOGIN and PASSWORD in environment)")]
    MissingCredentials,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid search endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Per-record PDF download errors
///
/// These are caught and reported by the batch driver rather than propagated,
/// so one failed download never aborts the remaining records.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Network error fetching {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for Scholar-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, SearchConfig, SmtpConfig};
pub use model::PaperRecord;
pub use output::OutputBundle;
