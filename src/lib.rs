//! lldp-probe
//!
//! LLDP neighbor discovery for Windows. Drives the in-box `pktmon`
//! packet-monitor service to capture LLDP frames on a chosen adapter,
//! converts the capture to text, and lifts the advertised TLV fields
//! into a human-readable summary.
//!
//! This crate provides the core implementation for the
//! `lldp-probe` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install lldp-probe
//! lldp-probe capture
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod pktmon;
pub mod utils;
