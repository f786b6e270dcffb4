//! lldp-probe CLI
//!
//! LLDP neighbor discovery for Windows. Captures LLDP frames with the
//! in-box pktmon service and summarizes what the switch advertises.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use lldp_probe::commands::{
    display_version, execute_adapters, execute_capture, execute_parse, validate_args, CaptureArgs,
};
use lldp_probe::utils::config::{DEFAULT_WORK_DIR, PKTMON_PROGRAM};

/// lldp-probe - LLDP neighbor discovery driven by pktmon
#[derive(Parser, Debug)]
#[command(name = "lldp-probe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// pktmon program name or path
    #[arg(long, global = true, env = "LLDP_PROBE_PKTMON", default_value = PKTMON_PROGRAM)]
    pktmon_path: String,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Capture LLDP frames on an adapter and summarize them
    Capture {
        /// Component ID to capture on (skips the interactive selection)
        #[arg(short, long)]
        adapter: Option<String>,

        /// Capture window in seconds (30-60; out-of-range falls back to 30)
        #[arg(short = 't', long)]
        duration: Option<u64>,

        /// Also write the summary as a JSON report
        #[arg(long)]
        json: Option<PathBuf>,

        /// Directory for the transient capture files
        #[arg(long, default_value = DEFAULT_WORK_DIR)]
        work_dir: PathBuf,

        /// Keep the capture files instead of deleting them at the end
        #[arg(long)]
        keep_files: bool,
    },

    /// List the adapters eligible for capture
    Adapters,

    /// Parse an existing converted capture without running pktmon
    Parse {
        /// Path to a text file produced by `pktmon format ... -v`
        #[arg(short, long)]
        file: PathBuf,

        /// Also write the summary as a JSON report
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Capture {
            adapter,
            duration,
            json,
            work_dir,
            keep_files,
        } => {
            let args = CaptureArgs {
                adapter,
                duration_secs: duration,
                output_json: json,
                keep_files,
                work_dir,
                program: cli.pktmon_path,
            };

            // Validate args first
            validate_args(&args)?;

            execute_capture(args)?;
        }

        Commands::Adapters => {
            execute_adapters(&cli.pktmon_path)?;
        }

        Commands::Parse { file, json } => {
            execute_parse(file, json)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
