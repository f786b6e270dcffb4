//! Parsing of the `pktmon list` component table.
//!
//! pktmon prints a positional table: banner text, a header row naming the
//! columns, a dashed separator, then one row per network component. Only the
//! rows matter to us, and only wired-ethernet components are worth offering
//! for LLDP capture.

use crate::utils::config::EXCLUDED_ADAPTER_KEYWORDS;
use serde::{Deserialize, Serialize};

/// One network component as reported by `pktmon list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adapter {
    /// Component id, the value `pktmon start --comp` expects
    pub id: String,

    /// MAC address column, kept verbatim
    pub mac: String,

    /// Friendly adapter name (the rest of the row, spaces included)
    pub name: String,
}

impl Adapter {
    /// Whether this adapter should be offered for LLDP capture
    ///
    /// pktmon lists every component it knows about, including bluetooth and
    /// Wi-Fi virtual adapters; those never see LLDP frames.
    pub fn is_capture_candidate(&self) -> bool {
        let name = self.name.to_lowercase();
        !EXCLUDED_ADAPTER_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword))
    }
}

/// Parse the raw `pktmon list` output into adapter rows
///
/// Everything before the header line (the one naming the `Address` and
/// `Name` columns) is ignored, as are separator and blank lines. Rows that
/// don't split into id / MAC / name are skipped silently.
pub fn parse_component_list(output: &str) -> Vec<Adapter> {
    let mut adapters = Vec::new();
    let mut in_table = false;

    for line in output.lines() {
        if !in_table {
            if line.contains("Address") && line.contains("Name") {
                in_table = true;
            }
            continue;
        }

        if line.contains("--") {
            continue;
        }

        if let Some((id, mac, name)) = split_component_row(line) {
            adapters.push(Adapter {
                id: id.to_string(),
                mac: mac.to_string(),
                name: name.to_string(),
            });
        }
    }

    adapters
}

/// Keep only the adapters worth offering for capture
pub fn eligible_adapters(adapters: Vec<Adapter>) -> Vec<Adapter> {
    adapters
        .into_iter()
        .filter(Adapter::is_capture_candidate)
        .collect()
}

/// Split one data row into id / MAC / remainder-of-line name
fn split_component_row(line: &str) -> Option<(&str, &str, &str)> {
    let line = line.trim();
    let (id, rest) = line.split_once(char::is_whitespace)?;
    let (mac, name) = rest.trim_start().split_once(char::is_whitespace)?;
    let name = name.trim();
    (!name.is_empty()).then_some((id, mac, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LIST: &str = "\
Network Components:

   Id MAC Address        Name
   -- -----------------  ----
    9 E8-6A-64-2D-85-46  Intel(R) Ethernet Connection (7) I219-LM
   12 5C-87-9C-12-33-21  Microsoft Wi-Fi Direct Virtual Adapter
   17 AC-67-5D-01-AB-CD  Intel(R) Wireless-AC 9560 160MHz
   21 00-15-5D-FF-0A-11  Bluetooth Device (Personal Area Network)
";

    #[test]
    fn test_parse_component_list() {
        let adapters = parse_component_list(SAMPLE_LIST);

        assert_eq!(adapters.len(), 4);
        assert_eq!(adapters[0].id, "9");
        assert_eq!(adapters[0].mac, "E8-6A-64-2D-85-46");
        assert_eq!(adapters[0].name, "Intel(R) Ethernet Connection (7) I219-LM");
        assert_eq!(adapters[3].name, "Bluetooth Device (Personal Area Network)");
    }

    #[test]
    fn test_parse_ignores_text_before_header() {
        // The banner row would split into three parts if it were scanned
        let output = "one two three\n   Id MAC Address  Name\n 4 AA-BB-CC-DD-EE-FF Realtek PCIe GbE\n";
        let adapters = parse_component_list(output);

        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].id, "4");
    }

    #[test]
    fn test_parse_without_header_yields_nothing() {
        let output = " 4 AA-BB-CC-DD-EE-FF Realtek PCIe GbE\n";
        assert!(parse_component_list(output).is_empty());
    }

    #[test]
    fn test_rows_missing_columns_are_skipped() {
        let output = "   Id MAC Address  Name\n 4 AA-BB-CC-DD-EE-FF\n\n 5\n 6 11-22-33-44-55-66 Usable Adapter\n";
        let adapters = parse_component_list(output);

        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].name, "Usable Adapter");
    }

    #[test]
    fn test_eligible_adapters_drops_wireless_and_bluetooth() {
        let eligible = eligible_adapters(parse_component_list(SAMPLE_LIST));

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].id, "9");
    }

    #[test]
    fn test_capture_candidate_is_case_insensitive() {
        let adapter = |name: &str| Adapter {
            id: "1".into(),
            mac: "00-00-00-00-00-00".into(),
            name: name.into(),
        };

        assert!(adapter("Realtek PCIe GbE Family Controller").is_capture_candidate());
        assert!(!adapter("Intel(R) Wi-Fi 6 AX201").is_capture_candidate());
        assert!(!adapter("BLUETOOTH Device").is_capture_candidate());
        assert!(!adapter("Dell Wireless 5821e").is_capture_candidate());
    }
}
