//! CLI entry point for the shred reconstruction tool

use clap::Parser;
use env_logger::Env;
use unshred::io::cli::{Cli, FileProcessor};

fn main() -> unshred::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let mut processor = FileProcessor::new(cli)?;
    processor.process()
}
