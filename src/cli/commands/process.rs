//! Process command implementation
//!
//! Runs the complete file based workflow: load the schedule document,
//! parse and stamp every entry, validate the structured records, and
//! write the survivors to CSV and JSON.

use super::shared::{create_spinner, load_configuration, setup_logging};
use crate::app::services::output_writer::write_outputs;
use crate::app::services::schedule_loader::{extract_entries, load_schedule_file};
use crate::app::services::schedule_processor::ScheduleProcessor;
use crate::app::services::validation::{validate_document, TracingSink};
use crate::cli::args::ProcessArgs;
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Process command runner
///
/// Orchestrates the full workflow:
/// 1. Set up logging and configuration
/// 2. Load the schedule document and collect raw entries
/// 3. Parse, stamp, and validate every entry
/// 4. Write outputs and report a summary
pub async fn run_process(args: ProcessArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting lease schedule processing");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    config.ensure_output_directory()?;

    let spinner = args
        .show_progress()
        .then(|| create_spinner("Processing lease schedules"));

    let document = load_schedule_file(&config.processing.input_path)?;
    let raw_entries = extract_entries(&document);
    info!(
        "Loaded {} title records with {} schedule entries",
        document.len(),
        raw_entries.len()
    );

    let processor = ScheduleProcessor::new();
    let (processed, processing_stats) = processor.process_document(&document);
    info!("{}", processing_stats.summary());

    let sink = TracingSink;
    let (valid_records, validation_stats) = validate_document(&processed, &sink);
    info!("{}", validation_stats.summary());

    let csv_path = config.output.csv_path();
    let json_path = config.output.json_path();
    write_outputs(&valid_records, &csv_path, &json_path)?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if !args.quiet {
        print_summary(
            validation_stats.valid,
            validation_stats.total,
            &csv_path,
            &json_path,
            start_time,
        );
    }

    Ok(())
}

fn print_summary(
    valid: usize,
    total: usize,
    csv_path: &std::path::Path,
    json_path: &std::path::Path,
    start_time: Instant,
) {
    println!();
    println!("{}", "Processing complete".green().bold());
    println!(
        "  Valid entries: {}",
        format!("{} / {}", valid, total).cyan()
    );
    println!("  CSV output:    {}", csv_path.display());
    println!("  JSON output:   {}", json_path.display());
    println!(
        "  Elapsed:       {}",
        HumanDuration(start_time.elapsed())
    );
}
