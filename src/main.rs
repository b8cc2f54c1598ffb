//! CLI entry point for class map layout generation

use clap::Parser;
use hsi_layout::io::cli::{Cli, LayoutProcessor};

fn main() -> hsi_layout::Result<()> {
    let cli = Cli::parse();
    hsi_layout::io::logging::init(cli.verbose);
    let mut processor = LayoutProcessor::new(cli);
    processor.process()
}
