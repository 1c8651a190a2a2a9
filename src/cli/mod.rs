//! Command dispatch.

mod args;

pub use args::{Cli, Commands};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::EnhanceConfig;
use crate::dom;
use crate::enhance::copy::code_blocks;
use crate::error::EnhanceError;
use crate::host::{Clipboard, SystemClipboard};
use crate::log;
use crate::page::Page;

/// Run the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let config = EnhanceConfig::load_or_default(&cli.config)?;
    config.validate()?;

    match &cli.command {
        Commands::Enhance {
            input,
            output,
            report,
        } => enhance_file(input, output.as_deref(), *report, config),
        Commands::Copy { input, block } => copy_block(input, *block),
    }
}

/// Apply the static enhancement passes to an HTML file.
fn enhance_file(
    input: &Path,
    output: Option<&Path>,
    report: bool,
    config: EnhanceConfig,
) -> Result<()> {
    let doc = load_document(input)?;
    let mut page = Page::new(doc, config);
    let boot = page.boot();

    let summary = format!(
        "{}: {} copy controls, {} anchors wired, {} headings tagged",
        input.display(),
        boot.copy_controls,
        boot.anchor_links,
        boot.tagged_headings
    );

    let rendered = dom::render(page.doc());
    match output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|e| EnhanceError::Io(path.to_path_buf(), e))?;
            log!("enhance"; "{summary}");
            log!("enhance"; "wrote {}", path.display());
            if report {
                println!("{}", serde_json::to_string_pretty(&boot)?);
            }
        }
        None if report => {
            log!("enhance"; "{summary}");
            println!("{}", serde_json::to_string_pretty(&boot)?);
        }
        // HTML goes to stdout: keep the summary off it unless asked for
        None => {
            crate::debug!("enhance"; "{summary}");
            println!("{rendered}");
        }
    }

    Ok(())
}

/// Copy a code block's text to the system clipboard.
fn copy_block(input: &Path, block: usize) -> Result<()> {
    if block == 0 {
        anyhow::bail!("block numbers start at 1");
    }

    let doc = load_document(input)?;
    let blocks = code_blocks(&doc);
    let Some((_, code)) = blocks.get(block - 1) else {
        anyhow::bail!(
            "no code block {block} in {} ({} present)",
            input.display(),
            blocks.len()
        );
    };

    let text = doc.text_content(*code);
    SystemClipboard::new().write_text(&text)?;
    log!("copy"; "copied block {block} ({} bytes)", text.len());
    Ok(())
}

fn load_document(input: &Path) -> Result<dom::Document> {
    let html =
        fs::read_to_string(input).map_err(|e| EnhanceError::Io(PathBuf::from(input), e))?;
    Ok(dom::parse(&html)?)
}
