//! Configuration management and validation.
//!
//! Provides configuration structures for the processing pipeline, output
//! destinations, and the HTTP server, with layered loading from a TOML
//! file plus command-line overrides.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for lease schedule processing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and processing settings
    pub processing: ProcessingConfig,

    /// Output file settings
    pub output: OutputConfig,

    /// HTTP server settings
    pub server: ServerConfig,
}

/// Settings for the processing pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Path to the lease schedule JSON document to process
    pub input_path: PathBuf,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("leases.json"),
        }
    }
}

/// Settings for output file generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory where output files are written
    pub output_dir: PathBuf,

    /// File name for the CSV output
    pub csv_filename: String,

    /// File name for the JSON output
    pub json_filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            csv_filename: "structured_lease_data.csv".to_string(),
            json_filename: "structured_lease_data.json".to_string(),
        }
    }
}

impl OutputConfig {
    /// Full path to the CSV output file
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_filename)
    }

    /// Full path to the JSON output file
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_filename)
    }
}

/// Settings for the HTTP ingestion server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub host: String,

    /// Port to bind the listener to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load with layered configuration (defaults -> file -> explicit paths)
    pub fn load_layered(
        input_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(input) = input_path {
            config.processing.input_path = input;
        }
        if let Some(output) = output_dir {
            config.output.output_dir = output;
        }

        Ok(config)
    }

    /// Default location of the user configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user config directory".to_string())
        })?;
        Ok(config_dir.join("lease-parser").join("config.toml"))
    }

    /// Validate the configuration for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if self.output.csv_filename.is_empty() {
            return Err(Error::configuration(
                "CSV output filename must not be empty".to_string(),
            ));
        }
        if self.output.json_filename.is_empty() {
            return Err(Error::configuration(
                "JSON output filename must not be empty".to_string(),
            ));
        }
        if self.server.host.is_empty() {
            return Err(Error::configuration(
                "Server host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        let dir = &self.output.output_dir;
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::configuration(format!(
                    "Failed to create output directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
