//! Pagelift - post-render enhancement for documentation pages.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pagelift::cli::{Cli, run};
use pagelift::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    run(&cli)
}
