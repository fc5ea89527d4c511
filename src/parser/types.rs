//! Common types for parsers

/// One release cycle's record in the registry document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBlock {
    /// Release cycle identifier (e.g., "6.3")
    pub cycle: String,
    /// Value of the `latest` field with quotes stripped
    pub latest: Option<String>,
    /// Value of the `latestReleaseDate` field (e.g., "2025-12-17", "unknown")
    pub latest_release_date: Option<String>,
    /// Byte offset of the block in the source (start of the `releaseCycle` line)
    pub start_offset: usize,
    /// Byte offset of the block in the source (end, exclusive; the line
    /// break before the next block or `---` is not included)
    pub end_offset: usize,
}

impl ReleaseBlock {
    /// Slice this block out of the document it was parsed from
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start_offset..self.end_offset]
    }
}
