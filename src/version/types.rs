//! Common types for the version feed

use chrono::NaiveDate;
use indexmap::IndexMap;

/// Newest known release of one release cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestRelease {
    /// Version string exactly as published (e.g., "6.3.3-c842")
    pub version: String,
    /// Day the version was released
    pub released_on: NaiveDate,
}

impl LatestRelease {
    pub fn new(version: impl Into<String>, released_on: NaiveDate) -> Self {
        Self {
            version: version.into(),
            released_on,
        }
    }

    /// Release date in the `YYYY-MM-DD` form used by the registry document
    pub fn date(&self) -> String {
        self.released_on
            .format(crate::config::DOCUMENT_DATE_FORMAT)
            .to_string()
    }
}

/// Release cycle ("6.3") to its newest release, in order of first appearance
/// in the feed.
pub type CycleMap = IndexMap<String, LatestRelease>;
