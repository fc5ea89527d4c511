use std::path::PathBuf;

// =============================================================================
// Format constants
// =============================================================================

/// Format of `released-on` in the vendor feed (e.g., "2025/12/17 00:00:00")
pub const FEED_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Format of `latestReleaseDate` in the registry document (e.g., "2025-12-17")
pub const DOCUMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Printed when no release cycle needs an update
pub const NO_UPDATES_TOKEN: &str = "NO_UPDATES";

/// Printed before the list of changes when the output file was written
pub const UPDATES_FOUND_TOKEN: &str = "UPDATES_FOUND";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable for an explicit log filter (takes precedence over `-v`)
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Environment variable for the optional log file
pub const LOG_FILE_ENV: &str = "EOL_SYNC_LOG_FILE";

/// Files taking part in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Vendor version feed (JSON)
    pub feed_path: PathBuf,
    /// Registry document to read
    pub document_path: PathBuf,
    /// Where the updated document is written
    pub output_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Additional log file
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Filter directive for the given verbosity
    pub fn level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Directive used when `RUST_LOG` is not set
    pub fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.level())
    }
}
