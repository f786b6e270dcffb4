//! Subprocess client for the Windows pktmon packet-monitor utility.

use crate::utils::config::{LLDP_ETHERTYPE, PKTMON_PROGRAM};
use crate::utils::error::PktmonError;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Thin wrapper around pktmon invocations
///
/// pktmon owns the actual capture machinery (filter table, ETL trace file,
/// text conversion); this type only shells out with fixed argument templates
/// and hands back stdout.
pub struct PktmonRunner {
    program: String,
}

impl PktmonRunner {
    /// Create a runner for the system `pktmon`
    pub fn new() -> Self {
        Self::with_program(PKTMON_PROGRAM)
    }

    /// Create a runner for an explicit program path
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `pktmon list` and return the raw component table
    pub fn list_components(&self) -> Result<String, PktmonError> {
        self.run("list", &list_args())
    }

    /// Install the LLDP ethertype filter
    pub fn add_lldp_filter(&self) -> Result<(), PktmonError> {
        self.run("filter add", &filter_add_args()).map(drop)
    }

    /// Start capturing on one component, writing the ETL trace to `etl_path`
    pub fn start_capture(&self, component_id: &str, etl_path: &Path) -> Result<(), PktmonError> {
        self.run("start", &start_args(component_id, etl_path))
            .map(drop)
    }

    /// Stop the running capture and flush the trace file
    pub fn stop_capture(&self) -> Result<(), PktmonError> {
        self.run("stop", &stop_args()).map(drop)
    }

    /// Convert a captured ETL trace into its verbose text rendering
    pub fn format_capture(&self, etl_path: &Path, txt_path: &Path) -> Result<(), PktmonError> {
        self.run("format", &format_args(etl_path, txt_path))
            .map(drop)
    }

    /// Remove all installed filters
    pub fn remove_filters(&self) -> Result<(), PktmonError> {
        self.run("filter remove", &filter_remove_args()).map(drop)
    }

    /// Reset pktmon counters and state
    pub fn reset(&self) -> Result<(), PktmonError> {
        self.run("reset", &reset_args()).map(drop)
    }

    /// Run one pktmon invocation and capture its output
    ///
    /// `operation` is the human name used in errors ("filter add", "stop", ...).
    /// Non-zero exit becomes `CommandFailed` with whatever detail the tool
    /// printed; stderr wins over stdout when both are present.
    fn run(&self, operation: &str, args: &[String]) -> Result<String, PktmonError> {
        debug!("Running: {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| PktmonError::Launch {
                program: self.program.clone(),
                source,
            })?;

        // pktmon emits ASCII; decode lossily rather than fail on stray bytes
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                stdout.trim().to_string()
            } else {
                stderr
            };
            return Err(PktmonError::CommandFailed {
                command: operation.to_string(),
                status: output.status.to_string(),
                detail,
            });
        }

        Ok(stdout)
    }
}

impl Default for PktmonRunner {
    fn default() -> Self {
        Self::new()
    }
}

// Fixed argument templates for each pktmon operation.

fn list_args() -> Vec<String> {
    vec!["list".into()]
}

fn filter_add_args() -> Vec<String> {
    vec![
        "filter".into(),
        "add".into(),
        "--ethertype".into(),
        format!("{LLDP_ETHERTYPE:#06x}"),
    ]
}

fn start_args(component_id: &str, etl_path: &Path) -> Vec<String> {
    vec![
        "start".into(),
        "--capture".into(),
        "--comp".into(),
        component_id.into(),
        "--pkt-size".into(),
        "0".into(),
        "-f".into(),
        etl_path.display().to_string(),
    ]
}

fn stop_args() -> Vec<String> {
    vec!["stop".into()]
}

fn format_args(etl_path: &Path, txt_path: &Path) -> Vec<String> {
    vec![
        "format".into(),
        etl_path.display().to_string(),
        "-o".into(),
        txt_path.display().to_string(),
        "-v".into(),
    ]
}

fn filter_remove_args() -> Vec<String> {
    vec!["filter".into(), "remove".into()]
}

fn reset_args() -> Vec<String> {
    vec!["reset".into()]
}
