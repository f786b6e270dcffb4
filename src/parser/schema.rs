//! Record and JSON report schema definitions.
//!
//! This module defines the structured record the parser produces and the
//! shape of JSON reports written to disk. The report schema is versioned to
//! allow future evolution.

use crate::pktmon::Adapter;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discovery fields advertised by an LLDP neighbor
///
/// One optional slot per fixed field name, so each key exists at most once
/// by construction. VLAN descriptors are the only repeating element; they
/// fold into a single `VLANs` entry in the mapping view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chassis_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_capabilities: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_capabilities: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_address: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vlans: Vec<VlanEntry>,
}

impl NeighborSummary {
    /// True when nothing at all was extracted from the capture
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Flat key/value view in canonical field order
    ///
    /// Absent fields are omitted; the accumulated VLAN descriptors fold into
    /// one `VLANs` entry, newline-joined.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let scalars = [
            ("Chassis ID", &self.chassis_id),
            ("Port ID", &self.port_id),
            ("Time to Live", &self.time_to_live),
            ("Port Description", &self.port_description),
            ("System Name", &self.system_name),
            ("System Description", &self.system_description),
            ("System Capabilities", &self.system_capabilities),
            ("Enabled Capabilities", &self.enabled_capabilities),
            ("Management Address", &self.management_address),
        ];

        let mut entries: Vec<(&'static str, String)> = scalars
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
            .collect();

        if !self.vlans.is_empty() {
            let block = self
                .vlans
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            entries.push(("VLANs", block));
        }

        entries
    }
}

/// One VLAN advertised via the 802.1 VLAN name TLV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanEntry {
    pub id: String,
    pub name: String,
}

impl fmt::Display for VlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VLAN ID: {} VLAN Name: {}", self.id, self.name)
    }
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Adapter the capture ran on (absent for offline parses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<Adapter>,

    /// Effective capture window in seconds (absent for offline parses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_secs: Option<u64>,

    /// Extracted neighbor fields
    pub neighbor: NeighborSummary,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl DiscoveryReport {
    /// Assemble a report around an extracted record
    pub fn new(
        adapter: Option<Adapter>,
        capture_secs: Option<u64>,
        neighbor: NeighborSummary,
    ) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            adapter,
            capture_secs,
            neighbor,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vlan(id: &str, name: &str) -> VlanEntry {
        VlanEntry {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_entries_canonical_order() {
        let summary = NeighborSummary {
            management_address: Some("10.20.30.40".into()),
            chassis_id: Some("00:1b:54:9a:2f:c0".into()),
            system_name: Some("sw-lab-01".into()),
            ..Default::default()
        };

        let keys: Vec<&str> = summary.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["Chassis ID", "System Name", "Management Address"]);
    }

    #[test]
    fn test_entries_fold_vlans_into_one_block() {
        let summary = NeighborSummary {
            port_id: Some("Gi1/0/24".into()),
            vlans: vec![vlan("110", "ENG-FLOOR-1"), vlan("120", "ENG-FLOOR-2")],
            ..Default::default()
        };

        let entries = summary.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].0, "VLANs");
        assert_eq!(
            entries[1].1,
            "VLAN ID: 110 VLAN Name: ENG-FLOOR-1\nVLAN ID: 120 VLAN Name: ENG-FLOOR-2"
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(NeighborSummary::default().is_empty());

        let with_vlan = NeighborSummary {
            vlans: vec![vlan("1", "default")],
            ..Default::default()
        };
        assert!(!with_vlan.is_empty());
    }

    #[test]
    fn test_vlan_entry_display() {
        assert_eq!(
            vlan("110", "ENG-FLOOR-1").to_string(),
            "VLAN ID: 110 VLAN Name: ENG-FLOOR-1"
        );
    }

    #[test]
    fn test_report_carries_schema_version() {
        let report = DiscoveryReport::new(None, Some(30), NeighborSummary::default());
        assert_eq!(report.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.capture_secs, Some(30));
        assert!(report.adapter.is_none());
    }
}
