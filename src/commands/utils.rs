use crate::utils::config::REPORT_SCHEMA_VERSION;

/// Display version information
pub fn display_version() {
    println!("lldp-probe v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("LLDP neighbor discovery for Windows, driven by pktmon.");
}
