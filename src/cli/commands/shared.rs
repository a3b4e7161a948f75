//! Shared components for CLI commands
//!
//! Configuration loading, logging setup, and progress reporting used by
//! both the process and serve commands.

use crate::cli::args::{ProcessArgs, ServeArgs};
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Set up structured logging for the process command
pub fn setup_logging(args: &ProcessArgs) -> Result<()> {
    init_subscriber(args.get_log_level(), args.quiet);
    Ok(())
}

/// Set up structured logging for the serve command
pub fn setup_serve_logging(args: &ServeArgs) -> Result<()> {
    init_subscriber(args.get_log_level(), false);
    Ok(())
}

fn init_subscriber(log_level: &str, quiet: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lease_parser={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &ProcessArgs) -> Result<Config> {
    info!("Loading configuration");

    let config_file = resolve_config_file(args.config_file.as_deref())?;
    let mut config = Config::load_layered(
        args.input_path.clone(),
        args.output_dir.clone(),
        config_file.as_deref(),
    )?;

    apply_cli_overrides(&mut config, args);

    config.validate()?;
    Ok(config)
}

/// Load configuration for the serve command
pub fn load_serve_configuration(args: &ServeArgs) -> Result<Config> {
    info!("Loading configuration");

    let config_file = resolve_config_file(args.config_file.as_deref())?;
    let mut config = Config::load_layered(None, args.output_dir.clone(), config_file.as_deref())?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Determine which config file to read, if any
fn resolve_config_file(explicit: Option<&Path>) -> Result<Option<std::path::PathBuf>> {
    if let Some(path) = explicit {
        info!("Using config file: {}", path.display());
        return Ok(Some(path.to_path_buf()));
    }

    let default_path = Config::default_config_path()?;
    if default_path.exists() {
        info!("Using config file: {}", default_path.display());
        Ok(Some(default_path))
    } else {
        info!("No config file found, using defaults");
        Ok(None)
    }
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &ProcessArgs) {
    if let Some(input_path) = &args.input_path {
        config.processing.input_path = input_path.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output.output_dir = output_dir.clone();
    }
}

/// Create a spinner for indeterminate progress reporting
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
