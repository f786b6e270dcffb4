//! Adapter listing command.
//!
//! Runs the list step of the pipeline on its own: ask pktmon for its
//! components and print the ones eligible for an LLDP capture.

use crate::output::render_adapter_table;
use crate::pktmon::{eligible_adapters, parse_component_list, PktmonRunner};
use anyhow::{Context, Result};
use log::debug;

/// List the adapters eligible for LLDP capture
///
/// **Public** - main entry point called from main.rs
pub fn execute_adapters(program: &str) -> Result<()> {
    let runner = PktmonRunner::with_program(program);

    let listing = runner
        .list_components()
        .context("Failed to list network adapters")?;
    let adapters = eligible_adapters(parse_component_list(&listing));

    debug!("Found {} eligible adapter(s)", adapters.len());

    if adapters.is_empty() {
        println!("No ethernet adapters found to capture on.");
        return Ok(());
    }

    print!("{}", render_adapter_table(&adapters));

    Ok(())
}
