//! Console rendering of the extracted record.
//!
//! Rendering is separated from printing so the exact layout stays testable;
//! the commands print whatever comes out of here.

use crate::parser::NeighborSummary;
use crate::pktmon::Adapter;

/// Render the neighbor record as the console summary
///
/// Scalar fields print as `key: value` lines in canonical order. The VLANs
/// entry prints as its own block: the key line, the descriptor lines, then a
/// separating blank line.
pub fn render_summary(summary: &NeighborSummary) -> String {
    let mut lines = vec!["Parsed LLDP Data:".to_string()];

    if summary.is_empty() {
        lines.push("  (no LLDP fields found)".to_string());
    }

    for (key, value) in summary.entries() {
        if key == "VLANs" {
            lines.push(format!("{key}:"));
            lines.push(value);
            lines.push(String::new());
        } else {
            lines.push(format!("{key}: {value}"));
        }
    }

    lines.join("\n") + "\n"
}

/// Render the eligible-adapter table shown before selection
pub fn render_adapter_table(adapters: &[Adapter]) -> String {
    let mut lines = Vec::with_capacity(adapters.len());
    for adapter in adapters {
        lines.push(format!(
            "Component ID: {}, MAC: {}, Name: {}",
            adapter.id, adapter.mac, adapter.name
        ));
    }
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::VlanEntry;

    #[test]
    fn test_render_summary_scalar_lines() {
        let summary = NeighborSummary {
            chassis_id: Some("00:1b:54:9a:2f:c0".into()),
            port_id: Some("Gi1/0/24".into()),
            ..Default::default()
        };

        assert_eq!(
            render_summary(&summary),
            "Parsed LLDP Data:\nChassis ID: 00:1b:54:9a:2f:c0\nPort ID: Gi1/0/24\n"
        );
    }

    #[test]
    fn test_render_summary_vlan_block() {
        let summary = NeighborSummary {
            system_name: Some("sw-lab-01".into()),
            vlans: vec![
                VlanEntry {
                    id: "110".into(),
                    name: "ENG".into(),
                },
                VlanEntry {
                    id: "120".into(),
                    name: "OPS".into(),
                },
            ],
            ..Default::default()
        };

        let rendered = render_summary(&summary);
        assert_eq!(
            rendered,
            "Parsed LLDP Data:\n\
             System Name: sw-lab-01\n\
             VLANs:\n\
             VLAN ID: 110 VLAN Name: ENG\n\
             VLAN ID: 120 VLAN Name: OPS\n\
             \n"
        );
    }

    #[test]
    fn test_render_summary_empty_record() {
        let rendered = render_summary(&NeighborSummary::default());
        assert_eq!(rendered, "Parsed LLDP Data:\n  (no LLDP fields found)\n");
    }

    #[test]
    fn test_render_adapter_table() {
        let adapters = vec![Adapter {
            id: "9".into(),
            mac: "E8-6A-64-2D-85-46".into(),
            name: "Intel(R) Ethernet Connection".into(),
        }];

        assert_eq!(
            render_adapter_table(&adapters),
            "Component ID: 9, MAC: E8-6A-64-2D-85-46, Name: Intel(R) Ethernet Connection\n"
        );
    }
}
