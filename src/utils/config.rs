//! Configuration and constants for the CLI.

/// External capture utility invoked for every capture-side operation
pub const PKTMON_PROGRAM: &str = "pktmon";

/// EtherType carried by LLDP frames (IEEE 802.1AB)
pub const LLDP_ETHERTYPE: u16 = 0x88CC;

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Capture window bounds. Switches advertise LLDP roughly every 30 seconds,
// so the window must cover at least one interval.
pub const DEFAULT_CAPTURE_SECS: u64 = 30;
pub const MIN_CAPTURE_SECS: u64 = 30;
pub const MAX_CAPTURE_SECS: u64 = 60;

/// Where the transient capture artifacts live unless --work-dir overrides it
pub const DEFAULT_WORK_DIR: &str = r"C:\temp";

// Transient file names under the work dir: the raw ETL trace pktmon writes,
// and its text conversion that the parser consumes.
pub const ETL_FILE_NAME: &str = "lldp.etl";
pub const TXT_FILE_NAME: &str = "lldp.txt";

// Adapters whose name matches any of these are never offered for capture.
// LLDP discovery only makes sense on wired ethernet.
pub const EXCLUDED_ADAPTER_KEYWORDS: &[&str] = &["bluetooth", "wireless", "wi-fi"];
