//! ticmeta Library
//!
//! A Rust library for harvesting astronomical catalog metadata for TESS
//! Input Catalog (TIC) targets and normalizing it into pipe-delimited CSV.
//!
//! This library provides tools for:
//! - Parsing fixed-column and piped-table ASCII catalog reports
//! - Multi-strategy parsing of SIMBAD object lookups (single object,
//!   object list, not-found)
//! - Parsing ExoFOP target reports including stellar parameters
//! - Scraping ASAS-SN variable-star results and the TESS EB portal
//! - Aggregating Zooniverse Planet Hunters tagging statistics
//! - Writing stable-column CSV output and raw-text dumps for offline analysis

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod asas_sn;
        pub mod bulk;
        pub mod columnar;
        pub mod exofop;
        pub mod export;
        pub mod simbad;
        pub mod tag_stats;
        pub mod tesseb;
    }
    pub mod adapters {
        pub mod http;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AsasSnMeta, ExofopMeta, SimbadMeta, TargetCoord};
pub use config::Config;

/// Result type alias for ticmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog harvesting operations
///
/// Note that the parsing core never produces these: malformed or missing
/// source text degrades to `None` fields or an `Unrecognized` outcome so a
/// bulk run can continue past one bad record. Errors here are reserved for
/// transport, I/O, and configuration failures.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport failure (connection, timeout, body read)
    #[error("HTTP error fetching '{url}': {message}")]
    Http {
        url: String,
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status from an upstream catalog
    #[error("HTTP status {status} from '{url}'")]
    HttpStatus { url: String, status: u16 },

    /// URL construction error
    #[error("Invalid URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// JSON payload from the Zooniverse talk API did not deserialize
    #[error("JSON decode error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Malformed target list input
    #[error("Input format error in '{file}': {message}")]
    InputFormat { file: String, message: String },

    /// CSV serialization error
    #[error("CSV output error: {message}")]
    CsvOutput {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP transport error with context
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a non-success HTTP status error
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a URL construction error
    pub fn url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::Url {
            url: url.into(),
            source,
        }
    }

    /// Create a JSON decode error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an input format error
    pub fn input_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a CSV output error without an underlying csv error
    pub fn csv_output(message: impl Into<String>) -> Self {
        Self::CsvOutput {
            message: message.into(),
            source: None,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvOutput {
            message: "CSV serialization failed".to_string(),
            source: Some(error),
        }
    }
}
