//! CLI entry point for the grayscale hole filling tool

use clap::Parser;
use holefill::io::cli::{Cli, FillProcessor};

fn main() -> holefill::Result<()> {
    let cli = Cli::parse();
    let processor = FillProcessor::new(cli);
    processor.process().map(|_| ())
}
