use clap::Parser;
use lease_parser::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Lease Parser - HM Land Registry Schedule Processor");
    println!("==================================================");
    println!();
    println!("Parse the free-text entries of HM Land Registry lease schedules into");
    println!("validated structured records, written to CSV and JSON.");
    println!();
    println!("USAGE:");
    println!("    lease-parser <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Process a lease schedule JSON file (main command)");
    println!("    serve       Run the HTTP ingestion server");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process a schedule document into the current directory:");
    println!("    lease-parser process --input leases.json");
    println!();
    println!("    # Process with a custom output directory and verbose logging:");
    println!("    lease-parser process --input leases.json --output ./out -vv");
    println!();
    println!("    # Run the ingestion server on a custom port:");
    println!("    lease-parser serve --port 8080");
    println!();
    println!("For detailed help on any command, use:");
    println!("    lease-parser <COMMAND> --help");
}
