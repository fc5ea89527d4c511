//! endoflife.date release-cycle parser
//!
//! Parses the front matter of an endoflife.date product page to extract
//! release-cycle blocks.
//!
//! Format example:
//! ```text
//! releases:
//!   - releaseCycle: "6.3"
//!     releaseDate: 2024-06-10
//!     latest: "6.3.3-c842"
//!     latestReleaseDate: 2025-12-17
//!
//!   - releaseCycle: "6.2"
//!     latest: "6.2.8-c263"
//! ---
//! ```
//!
//! A block runs from its `releaseCycle` line up to the line break before the
//! next `  - releaseCycle:` line or the closing `---`. A block with neither
//! after it is not recognized.

use regex::Regex;
use tracing::debug;

use crate::parser::field::FieldLocator;
use crate::parser::types::ReleaseBlock;

/// Field holding the newest version of a cycle
pub const LATEST_FIELD: &str = "latest";
/// Field holding the release date of the newest version
pub const LATEST_RELEASE_DATE_FIELD: &str = "latestReleaseDate";

/// Parser for release-cycle blocks
pub struct ReleaseCycleParser {
    /// Regex for block start: `  - releaseCycle: "6.3"`
    block_start_re: Regex,
    /// Regex for lines that close the preceding block
    block_end_re: Regex,
    latest: FieldLocator,
    latest_release_date: FieldLocator,
}

impl ReleaseCycleParser {
    pub fn new() -> Self {
        Self {
            // Match: `  - releaseCycle: "<cycle>"`
            block_start_re: Regex::new(r#"(?m)^  - releaseCycle: "(?P<cycle>[^"\r\n]+)""#)
                .unwrap(),
            // Match: `  - releaseCycle:` or a `---` line
            block_end_re: Regex::new(r"(?m)^(?:  - releaseCycle:|---\r?$)").unwrap(),
            latest: FieldLocator::new(LATEST_FIELD),
            latest_release_date: FieldLocator::new(LATEST_RELEASE_DATE_FIELD),
        }
    }

    /// Extract every release block in document order
    pub fn parse(&self, content: &str) -> Vec<ReleaseBlock> {
        let mut blocks = Vec::new();

        for caps in self.block_start_re.captures_iter(content) {
            let header = caps.get(0).unwrap();
            let cycle = caps.name("cycle").unwrap().as_str();

            // Every terminator sits at the start of a later line, so the byte
            // before it is the line break ending this block.
            let Some(terminator) = self.block_end_re.find_at(content, header.end()) else {
                debug!("Release cycle {} has no closing line, ignoring", cycle);
                continue;
            };

            let start_offset = header.start();
            let end_offset = terminator.start() - 1;
            let text = &content[start_offset..end_offset];

            blocks.push(ReleaseBlock {
                cycle: cycle.to_string(),
                latest: self
                    .latest
                    .locate(text)
                    .and_then(|span| span.value(text))
                    .map(str::to_string),
                latest_release_date: self
                    .latest_release_date
                    .locate(text)
                    .and_then(|span| span.value(text))
                    .map(str::to_string),
                start_offset,
                end_offset,
            });
        }

        debug!("Parsed {} release blocks", blocks.len());
        blocks
    }
}

impl Default for ReleaseCycleParser {
    fn default() -> Self {
        Self::new()
    }
}
