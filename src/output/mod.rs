//! Output generation module.
//!
//! Handles console rendering of the neighbor summary and JSON report files.

pub mod json;
pub mod text;

pub use json::{read_report, write_report};
pub use text::{render_adapter_table, render_summary};
