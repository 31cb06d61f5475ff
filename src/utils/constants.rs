pub const CONFIG_PATH: &str = "console.toml";

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 300_000; // 5 minutes
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rendered in place of output that could not be computed.
pub const PLACEHOLDER: &str = "";
