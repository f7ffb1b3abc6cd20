//! w-extract - build wordlists from URL lists
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use w_extract::cli::Args;
use w_extract::processor::{ExtractConfig, Processor};
use w_extract::report::{print_bullet, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG wins over the flags
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Create extraction configuration
    let config = ExtractConfig::from_args(&args);

    // Show configuration
    if args.verbose {
        print_config(&config);
    }

    // Create and run processor
    let processor = Processor::new(config)?;
    processor.run()?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ExtractConfig) {
    print_header("Configuration");

    print_info(&format!("Input:   {:?}", config.input));
    print_info(&format!("Output:  {}", config.sink));
    print_info(&format!("Mode:    {}", config.mode));
    for category in config.mode.categories() {
        print_bullet(category.pattern());
    }
    print_info(&format!("Count:   {}", config.count));
    print_info(&format!("Decode:  {}", config.url_decode));
}
