//! Parsing of pktmon text captures into an LLDP neighbor record.
//!
//! `pktmon format -v` decodes captured frames into a verbose text listing;
//! this module scans that listing for the LLDP TLV lines and lifts them into
//! the [`NeighborSummary`] structure.

pub mod capture_text;
pub mod schema;

pub use capture_text::parse_capture_text;
pub use schema::{DiscoveryReport, NeighborSummary, VlanEntry};
