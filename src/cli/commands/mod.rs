//! Command implementations for the lease schedule parser CLI
//!
//! Each command is implemented in its own module; shared configuration
//! loading and logging setup live in [`shared`].

pub mod process;
pub mod serve;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on the parsed
/// CLI arguments:
/// - `process`: file based processing with CSV and JSON output
/// - `serve`: HTTP ingestion server
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Serve(serve_args)) => serve::run_serve(serve_args).await,
        None => Ok(()),
    }
}
