//! Extraction of LLDP discovery fields from the converted capture text.
//!
//! `pktmon format -v` renders each captured frame as a line-oriented TLV
//! listing. We scan for a known marker on each line and lift the value out
//! of the marker line itself or the line(s) right after it, depending on
//! where the converter puts it. The parser never fails: malformed or missing
//! value lines just leave the field absent.

use super::schema::{NeighborSummary, VlanEntry};
use log::debug;

// Marker fragments the converter uses to name each TLV. A line is matched by
// containment, so leading frame/indent decoration doesn't matter.
const CHASSIS_ID_MARKER: &str = "Chassis ID TLV";
const PORT_ID_MARKER: &str = "Port ID TLV";
const TIME_TO_LIVE_MARKER: &str = "Time to Live TLV";
const PORT_DESCRIPTION_MARKER: &str = "Port Description TLV";
const SYSTEM_NAME_MARKER: &str = "System Name TLV";
const SYSTEM_DESCRIPTION_MARKER: &str = "System Description TLV";
const SYSTEM_CAPABILITIES_MARKER: &str = "System Capabilities TLV";
const MANAGEMENT_ADDRESS_MARKER: &str = "Management Address TLV";
const VLAN_NAME_MARKER: &str = "VLAN name Subtype";

/// Parse a converted capture dump into the neighbor record
///
/// Later occurrences of a scalar field overwrite earlier ones (the last
/// captured frame wins); VLAN descriptors accumulate across all frames.
/// Lines consumed as values are not themselves scanned for markers.
pub fn parse_capture_text(text: &str) -> NeighborSummary {
    let lines: Vec<&str> = text.lines().collect();
    let mut summary = NeighborSummary::default();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        let mut consumed = 0;

        if line.contains(CHASSIS_ID_MARKER) {
            summary.chassis_id = tail_value(next_line(&lines, index, 1));
            consumed = 1;
        } else if line.contains(PORT_ID_MARKER) {
            summary.port_id = tail_value(next_line(&lines, index, 1));
            consumed = 1;
        } else if line.contains(TIME_TO_LIVE_MARKER) {
            summary.time_to_live = tail_value(Some(line));
        } else if line.contains(PORT_DESCRIPTION_MARKER) {
            summary.port_description = tail_value(Some(line));
        } else if line.contains(SYSTEM_NAME_MARKER) {
            summary.system_name = tail_value(Some(line));
        } else if line.contains(SYSTEM_DESCRIPTION_MARKER) {
            // The description is the whole following line, no key prefix
            summary.system_description = whole_line(next_line(&lines, index, 1));
            consumed = 1;
        } else if line.contains(SYSTEM_CAPABILITIES_MARKER) {
            summary.system_capabilities = tail_value(next_line(&lines, index, 1));
            summary.enabled_capabilities = tail_value(next_line(&lines, index, 2));
            consumed = 2;
        } else if line.contains(MANAGEMENT_ADDRESS_MARKER) {
            summary.management_address = tail_value(next_line(&lines, index, 1));
            consumed = 1;
        } else if line.contains(VLAN_NAME_MARKER) {
            let id = tail_value(next_line(&lines, index, 1));
            let name = tail_value(next_line(&lines, index, 2));
            match (id, name) {
                (Some(id), Some(name)) => summary.vlans.push(VlanEntry { id, name }),
                _ => debug!("Skipping VLAN name TLV with malformed id/name lines"),
            }
            consumed = 2;
        }

        index += 1 + consumed;
    }

    summary
}

/// Lookahead helper; `offset` lines past the marker line
fn next_line<'a>(lines: &[&'a str], index: usize, offset: usize) -> Option<&'a str> {
    lines.get(index + offset).copied()
}

/// Value after the first `": "` on the line, trimmed; empty values count
/// as absent
fn tail_value(line: Option<&str>) -> Option<String> {
    line.and_then(|l| l.split_once(": "))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// The whole line, trimmed; blank lines count as absent
fn whole_line(line: Option<&str>) -> Option<String> {
    line.map(|l| l.trim().to_string())
        .filter(|value| !value.is_empty())
}
