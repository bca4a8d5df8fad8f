// kubeclean/src/main.rs
//! kubeclean entry point.
//!
//! Parses flags, sets up logging and runs the clean command on stdin/stdout.
//! Any failure is printed to stderr and the process exits with status 1.

use anyhow::Result;
use clap::Parser;
use std::io;

use kubeclean::cli::Cli;
use kubeclean::commands::clean::{run_clean, CleanOptions};
use kubeclean::logger;

fn main() -> Result<()> {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        // --help and --version exit 0; usage errors exit 1 like every other failure.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if args.verbose {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }
    log::info!("kubeclean started. Version: {}", env!("CARGO_PKG_VERSION"));

    let opts = CleanOptions::from(&args);
    run_clean(&opts, io::stdin().lock(), io::stdout().lock())
}
