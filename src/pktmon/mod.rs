//! Boundary to the external pktmon capture utility.
//!
//! Everything that touches the wire happens inside pktmon; this module owns
//! the subprocess invocations (fixed argument templates) and the parsing of
//! the component listing the tool prints.

pub mod adapters;
pub mod runner;

// Re-export main types
pub use adapters::{eligible_adapters, parse_component_list, Adapter};
pub use runner::PktmonRunner;
