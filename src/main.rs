//! CLI entry point for greedy edge-matching tile grid generation

use clap::Parser;
use edgetile::io::cli::{Cli, GenerationRunner};
use flexi_logger::{Logger, default_format};

fn main() -> edgetile::Result<()> {
    let cli = Cli::parse();

    // The handle flushes on drop, so it lives until generation ends
    let _logger = Logger::try_with_str(&cli.log)?
        .format(default_format)
        .start()?;

    let mut runner = GenerationRunner::new(cli);
    runner.process()
}
