//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod adapters;
pub mod capture;
pub mod parse;
pub mod utils;

// Re-export main command functions
pub use adapters::execute_adapters;
pub use capture::{execute_capture, validate_args, CaptureArgs};
pub use parse::execute_parse;
pub use utils::display_version;
