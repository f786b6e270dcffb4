//! Offline parsing of an already-converted capture.
//!
//! Takes a text file produced by `pktmon format ... -v` (for example one kept
//! around with `--keep-files`) and runs the same field extraction and
//! rendering as the live pipeline, without touching pktmon.

use crate::output::{render_summary, write_report};
use crate::parser::{parse_capture_text, DiscoveryReport};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Execute the parse command
///
/// **Public** - main entry point called from main.rs
pub fn execute_parse(file: PathBuf, output_json: Option<PathBuf>) -> Result<()> {
    info!("Parsing capture text: {}", file.display());

    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read capture text {}", file.display()))?;

    let summary = parse_capture_text(&text);
    print!("{}", render_summary(&summary));

    if let Some(json_path) = output_json {
        // Offline runs carry no adapter or capture-window provenance.
        let report = DiscoveryReport::new(None, None, summary);
        write_report(&report, &json_path).context("Failed to write the JSON report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    Ok(())
}
