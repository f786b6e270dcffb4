//! Capture command implementation.
//!
//! The capture command:
//! 1. Resets any leftover pktmon state and stale temp files
//! 2. Lists adapters and resolves the one to capture on
//! 3. Installs the LLDP ethertype filter and runs the capture window
//! 4. Converts the capture to text and parses the TLV fields
//! 5. Prints the summary and optionally writes a JSON report
//!
//! Teardown always runs at the end of a run, success or error, so a failed
//! session never leaves a filter or running capture behind.

use crate::output::{render_adapter_table, render_summary, write_report};
use crate::parser::{parse_capture_text, DiscoveryReport};
use crate::pktmon::{eligible_adapters, parse_component_list, Adapter, PktmonRunner};
use crate::utils::config::{
    DEFAULT_CAPTURE_SECS, DEFAULT_WORK_DIR, ETL_FILE_NAME, MAX_CAPTURE_SECS, MIN_CAPTURE_SECS,
    PKTMON_PROGRAM, TXT_FILE_NAME,
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Arguments for the capture command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CaptureArgs {
    /// Component ID to capture on (None = interactive selection)
    pub adapter: Option<String>,

    /// Requested capture window in seconds (None = default)
    pub duration_secs: Option<u64>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Keep the transient .etl / .txt files after the run
    pub keep_files: bool,

    /// Directory holding the transient capture files
    pub work_dir: PathBuf,

    /// pktmon program name or path
    pub program: String,
}

impl Default for CaptureArgs {
    fn default() -> Self {
        Self {
            adapter: None,
            duration_secs: None,
            output_json: None,
            keep_files: false,
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            program: PKTMON_PROGRAM.to_string(),
        }
    }
}

/// Execute the capture command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Capture command arguments
///
/// # Returns
/// Ok if the capture succeeds, or if there is nothing to capture on (no
/// eligible adapters, or the user declines the interactive selection)
///
/// # Errors
/// * pktmon launch or command failures
/// * File I/O errors around the converted capture or the JSON report
pub fn execute_capture(args: CaptureArgs) -> Result<()> {
    let start_time = Instant::now();

    let runner = PktmonRunner::with_program(&args.program);
    let etl_path = args.work_dir.join(ETL_FILE_NAME);
    let txt_path = args.work_dir.join(TXT_FILE_NAME);

    info!("Starting LLDP capture using '{}'", args.program);
    debug!("Work directory: {}", args.work_dir.display());

    let result = run_pipeline(&args, &runner, &etl_path, &txt_path);

    // Runs on the success and the error path alike, and never overrides the
    // pipeline's own result.
    info!("Cleaning up capture session...");
    cleanup_session(&runner);
    if args.keep_files {
        info!("Keeping capture files in {}", args.work_dir.display());
    } else {
        remove_temp_files(&etl_path, &txt_path);
    }

    if result.is_ok() {
        let elapsed = start_time.elapsed();
        info!("Capture completed in {:.2}s", elapsed.as_secs_f64());
    }

    result
}

fn run_pipeline(
    args: &CaptureArgs,
    runner: &PktmonRunner,
    etl_path: &Path,
    txt_path: &Path,
) -> Result<()> {
    info!("Step 1/8: Cleaning up previous capture state...");
    cleanup_session(runner);
    remove_temp_files(etl_path, txt_path);

    std::fs::create_dir_all(&args.work_dir).with_context(|| {
        format!(
            "Failed to create work directory {}",
            args.work_dir.display()
        )
    })?;

    info!("Step 2/8: Listing network adapters...");
    let listing = runner
        .list_components()
        .context("Failed to list network adapters")?;
    let adapters = eligible_adapters(parse_component_list(&listing));

    debug!("Found {} eligible adapter(s)", adapters.len());

    if adapters.is_empty() {
        println!("No ethernet adapters found to capture on.");
        return Ok(());
    }

    info!("Step 3/8: Resolving the capture adapter...");
    let adapter = match resolve_adapter(args.adapter.as_deref(), &adapters)? {
        Some(adapter) => adapter,
        None => {
            info!("No adapter selected, exiting");
            return Ok(());
        }
    };

    info!("Capturing on component {} ({})", adapter.id, adapter.name);

    let duration_secs = effective_duration(args.duration_secs);

    info!("Step 4/8: Installing the LLDP ethertype filter...");
    runner
        .add_lldp_filter()
        .context("Failed to install the LLDP filter")?;

    info!("Step 5/8: Capturing for {duration_secs} seconds...");
    runner
        .start_capture(&adapter.id, etl_path)
        .context("Failed to start the capture")?;
    run_countdown(duration_secs);

    info!("Step 6/8: Stopping the capture...");
    runner.stop_capture().context("Failed to stop the capture")?;

    info!("Step 7/8: Converting the capture to text...");
    runner
        .format_capture(etl_path, txt_path)
        .context("Failed to convert the capture to text")?;

    info!("Step 8/8: Parsing LLDP fields...");
    let text = std::fs::read_to_string(txt_path).with_context(|| {
        format!("Failed to read converted capture {}", txt_path.display())
    })?;
    let summary = parse_capture_text(&text);

    print!("{}", render_summary(&summary));

    if let Some(json_path) = &args.output_json {
        let report = DiscoveryReport::new(Some(adapter), Some(duration_secs), summary);
        write_report(&report, json_path).context("Failed to write the JSON report")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    Ok(())
}

/// Resolve which adapter to capture on
///
/// A requested Component ID must match an eligible adapter. Without one, the
/// user picks interactively; `None` means they declined.
fn resolve_adapter(requested: Option<&str>, adapters: &[Adapter]) -> Result<Option<Adapter>> {
    match requested {
        Some(id) => match adapters.iter().find(|adapter| adapter.id == id) {
            Some(adapter) => Ok(Some(adapter.clone())),
            None => anyhow::bail!("Component ID {} is not an eligible adapter", id),
        },
        None => Ok(prompt_adapter_selection(adapters)),
    }
}

/// Interactive Component ID selection on stdin
///
/// Reprompts on invalid input; empty input (or EOF) declines the capture.
fn prompt_adapter_selection(adapters: &[Adapter]) -> Option<Adapter> {
    print!("{}", render_adapter_table(adapters));
    println!("Enter the Component ID to capture on:");

    loop {
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        let selection = input.trim();
        if selection.is_empty() {
            return None;
        }

        if let Some(adapter) = adapters.iter().find(|adapter| adapter.id == selection) {
            return Some(adapter.clone());
        }

        println!("Invalid Component ID entered. Please try again or press Enter to exit.");
    }
}

/// Normalize the requested capture duration
///
/// Out-of-range values are a warning, not an error: the capture falls back to
/// the default window.
fn effective_duration(requested: Option<u64>) -> u64 {
    match requested {
        Some(secs) if (MIN_CAPTURE_SECS..=MAX_CAPTURE_SECS).contains(&secs) => secs,
        Some(secs) => {
            warn!(
                "Invalid capture duration: {} seconds. Duration must be between {} and {} seconds.",
                secs, MIN_CAPTURE_SECS, MAX_CAPTURE_SECS
            );
            warn!(
                "Setting capture duration to default value of {} seconds.",
                DEFAULT_CAPTURE_SECS
            );
            DEFAULT_CAPTURE_SECS
        }
        None => DEFAULT_CAPTURE_SECS,
    }
}

/// Print the one-line countdown while the capture window elapses
fn run_countdown(duration_secs: u64) {
    let deadline = Instant::now() + Duration::from_secs(duration_secs);

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        let display_secs = remaining.as_secs_f64().ceil() as u64;
        print!("\rCapturing... {display_secs} seconds remaining ");
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_secs(1).min(remaining));
    }

    println!();
}

/// Best-effort teardown of pktmon session state
///
/// Failures are logged and swallowed; stop/remove/reset legitimately fail
/// when no session is active.
fn cleanup_session(runner: &PktmonRunner) {
    if let Err(e) = runner.stop_capture() {
        debug!("Cleanup: stop skipped ({e})");
    }
    if let Err(e) = runner.remove_filters() {
        debug!("Cleanup: filter removal skipped ({e})");
    }
    if let Err(e) = runner.reset() {
        debug!("Cleanup: reset skipped ({e})");
    }
}

/// Delete the transient capture files, tolerating their absence
fn remove_temp_files(etl_path: &Path, txt_path: &Path) {
    for path in [etl_path, txt_path] {
        match std::fs::remove_file(path) {
            Ok(()) => debug!("Removed {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => debug!("Could not remove {}: {}", path.display(), e),
        }
    }
}

/// Validate capture arguments
///
/// **Public** - can be called before execute_capture for early validation
///
/// Duration is deliberately not validated here: an out-of-range value warns
/// and falls back to the default inside the pipeline.
pub fn validate_args(args: &CaptureArgs) -> Result<()> {
    if args.program.is_empty() {
        anyhow::bail!("pktmon program cannot be empty");
    }

    if args.work_dir.as_os_str().is_empty() {
        anyhow::bail!("Work directory cannot be empty");
    }

    if let Some(adapter) = &args.adapter {
        if adapter.trim().is_empty() {
            anyhow::bail!("Component ID cannot be blank");
        }

        if !adapter.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("Component ID must be numeric, got '{}'", adapter);
        }
    }

    if let Some(json_path) = &args.output_json {
        if json_path.exists() && json_path.is_dir() {
            anyhow::bail!(
                "JSON output path is a directory: {}",
                json_path.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_defaults() {
        let args = CaptureArgs::default();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_program() {
        let args = CaptureArgs {
            program: String::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_work_dir() {
        let args = CaptureArgs {
            work_dir: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_blank_adapter() {
        let args = CaptureArgs {
            adapter: Some("   ".to_string()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_non_numeric_adapter() {
        let args = CaptureArgs {
            adapter: Some("eth0".to_string()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_numeric_adapter() {
        let args = CaptureArgs {
            adapter: Some("9".to_string()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_json_path_is_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = CaptureArgs {
            output_json: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_effective_duration_default() {
        assert_eq!(effective_duration(None), DEFAULT_CAPTURE_SECS);
    }

    #[test]
    fn test_effective_duration_in_range() {
        assert_eq!(effective_duration(Some(30)), 30);
        assert_eq!(effective_duration(Some(45)), 45);
        assert_eq!(effective_duration(Some(60)), 60);
    }

    #[test]
    fn test_effective_duration_out_of_range() {
        assert_eq!(effective_duration(Some(29)), DEFAULT_CAPTURE_SECS);
        assert_eq!(effective_duration(Some(61)), DEFAULT_CAPTURE_SECS);
        assert_eq!(effective_duration(Some(0)), DEFAULT_CAPTURE_SECS);
    }

    #[test]
    fn test_resolve_adapter_requested_match() {
        let adapters = vec![Adapter {
            id: "9".to_string(),
            mac: "E8-6A-64-2D-85-46".to_string(),
            name: "Intel(R) Ethernet Connection".to_string(),
        }];

        let resolved = resolve_adapter(Some("9"), &adapters).unwrap();
        assert_eq!(resolved.unwrap().id, "9");
    }

    #[test]
    fn test_resolve_adapter_requested_not_eligible() {
        let adapters = vec![Adapter {
            id: "9".to_string(),
            mac: "E8-6A-64-2D-85-46".to_string(),
            name: "Intel(R) Ethernet Connection".to_string(),
        }];

        assert!(resolve_adapter(Some("12"), &adapters).is_err());
    }
}
