//! Command-line argument definitions for the lease schedule parser
//!
//! The complete CLI surface is defined here with the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the lease schedule parser
///
/// Converts HM Land Registry lease schedule documents from their raw
/// free-text entry format into validated structured records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lease-parser",
    version,
    about = "Parse HM Land Registry lease schedules into validated structured records",
    long_about = "Parses the free-text entries of HM Land Registry title register lease \
                  schedules into structured records, validates every field against the \
                  registry's formatting rules, and writes the surviving records to CSV \
                  and JSON. Can also run as an HTTP service accepting schedule documents."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a lease schedule JSON file into CSV and JSON output
    Process(ProcessArgs),
    /// Run the HTTP ingestion server
    Serve(ServeArgs),
}

/// Arguments for the process command (file based processing)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input path to the lease schedule JSON document
    ///
    /// The document must be a JSON array of title objects, each optionally
    /// carrying a "leaseschedule" key with its schedule entries.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to the lease schedule JSON document"
    )]
    pub input_path: Option<PathBuf>,

    /// Output directory for the generated CSV and JSON files
    ///
    /// Will be created if it doesn't exist. If not specified, defaults to
    /// the current directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to TOML configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress all output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ProcessArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input_path {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }
        }
        Ok(())
    }

    /// Get the effective log level based on verbose/quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress indicators (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the serve command (HTTP ingestion server)
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Address to bind the server listener to
    #[arg(
        long = "host",
        value_name = "ADDR",
        help = "Address to bind the server to (default from config, 0.0.0.0)"
    )]
    pub host: Option<String>,

    /// Port to bind the server listener to
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Port to bind the server to (default from config, 5000)"
    )]
    pub port: Option<u16>,

    /// Output directory for the generated CSV and JSON files
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for generated files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to TOML configuration file"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,
}

impl ServeArgs {
    /// Get the effective log level based on the verbose flag
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info", // Server mode defaults to request-level logging
            1 => "debug",
            _ => "trace",
        }
    }
}
