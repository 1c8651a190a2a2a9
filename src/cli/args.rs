//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Pagelift documentation-page enhancer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Verbose diagnostic output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: pagelift.toml)
    #[arg(short = 'C', long, global = true, default_value = "pagelift.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Apply static enhancements to a rendered HTML page
    #[command(visible_alias = "e")]
    Enhance {
        /// Input HTML file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Print a JSON summary of applied enhancements
        #[arg(short, long)]
        report: bool,
    },

    /// Copy a code block's text to the system clipboard
    #[command(visible_alias = "c")]
    Copy {
        /// Input HTML file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Code block number (first block is 1)
        #[arg(short, long, default_value_t = 1)]
        block: usize,
    },
}
