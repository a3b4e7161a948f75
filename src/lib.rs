//! Lease Parser Library
//!
//! A Rust library for converting HM Land Registry "Schedule of Notices of
//! Lease" register text into structured, validated records.
//!
//! This library provides tools for:
//! - Splitting raw register entry lines into main text and NOTE annotations
//! - Segmenting fixed-width main text into the four schedule columns
//! - Decorating structured records with identifiers and timestamps
//! - Validating every record against field-level shape rules
//! - Writing validated records as CSV and JSON
//! - Serving the whole pipeline behind an HTTP endpoint

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod entry_parser;
        pub mod output_writer;
        pub mod schedule_loader;
        pub mod schedule_processor;
        pub mod validation;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{RawEntry, ScheduleItem, StructuredEntry};
pub use config::Config;

/// Result type alias for the lease parser
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for lease schedule processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON document could not be read or decoded
    #[error("JSON error in '{file}': {message}")]
    Json {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// CSV writing error
    #[error("CSV writing error: {message}")]
    CsvWriting {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Input document does not have the expected schedule shape
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// HTTP server error
    #[error("Server error: {message}")]
    Server { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::Json {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a CSV writing error
    pub fn csv_writing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvWriting {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
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

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            file: "unknown".to_string(),
            message: "JSON processing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML configuration: {error}"),
        }
    }
}
