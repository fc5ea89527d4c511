//! Version bumping for release blocks

use tracing::{debug, info, warn};

use crate::parser::field::{FIELD_INDENT, FieldLocator, FieldSpan};
use crate::parser::release_cycle::{LATEST_FIELD, LATEST_RELEASE_DATE_FIELD};
use crate::parser::types::ReleaseBlock;
use crate::update::types::{Change, UpdateResult};
use crate::version::release::ReleaseVersion;
use crate::version::types::CycleMap;

/// Rewrites release blocks whose cycle has a newer release in the feed
pub struct Updater {
    latest: FieldLocator,
    latest_release_date: FieldLocator,
}

impl Updater {
    pub fn new() -> Self {
        Self {
            latest: FieldLocator::new(LATEST_FIELD),
            latest_release_date: FieldLocator::new(LATEST_RELEASE_DATE_FIELD),
        }
    }

    /// Apply every qualifying update to `content`.
    ///
    /// `blocks` must come from parsing `content`, in document order. Blocks
    /// are rewritten last to first so the offsets of the remaining blocks
    /// stay valid; the returned changes follow that order.
    pub fn apply(&self, content: &str, blocks: &[ReleaseBlock], cycles: &CycleMap) -> UpdateResult {
        let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let mut updated = content.to_string();
        let mut changes = Vec::new();

        for block in blocks.iter().rev() {
            let Some(release) = cycles.get(&block.cycle) else {
                debug!("Release cycle {} not in feed", block.cycle);
                continue;
            };

            // A block without `latest` has never been filled in
            let current = match block.latest.as_deref() {
                None => ReleaseVersion::default(),
                Some(latest) => match ReleaseVersion::parse(latest) {
                    Some(version) => version,
                    None => {
                        warn!(
                            "Release cycle {} has unrecognized latest version {:?}, leaving it",
                            block.cycle, latest
                        );
                        continue;
                    }
                },
            };

            let Some(candidate) = ReleaseVersion::parse(&release.version) else {
                debug!("Feed version {:?} is not comparable", release.version);
                continue;
            };

            if candidate <= current {
                debug!(
                    "Release cycle {} is up to date ({})",
                    block.cycle,
                    block.latest.as_deref().unwrap_or_default()
                );
                continue;
            }

            let rewritten = self.rewrite_block(
                block.text(content),
                newline,
                &release.version,
                &release.date(),
            );
            updated.replace_range(block.start_offset..block.end_offset, &rewritten);

            let change = Change::new(&block.cycle, block.latest.clone(), &release.version);
            info!("Updated {}", change);
            changes.push(change);
        }

        UpdateResult {
            content: updated,
            changes,
        }
    }

    /// Set `latest` and `latestReleaseDate` in one block, inserting the
    /// fields when they are missing. Inserted lines end with `newline`.
    fn rewrite_block(&self, text: &str, newline: &str, version: &str, date: &str) -> String {
        let quoted = format!("\"{version}\"");

        let mut block = match self.latest.locate(text) {
            Some(span) => replace_value(text, span, &quoted),
            None => {
                // Right after the `releaseCycle` line
                let header_end = text.find(['\r', '\n']).unwrap_or(text.len());
                insert_line(text, header_end, newline, LATEST_FIELD, &quoted)
            }
        };

        block = match self.latest_release_date.locate(&block) {
            Some(span) => replace_value(&block, span, date),
            None => match self.latest.locate(&block) {
                Some(latest) => insert_line(
                    &block,
                    latest.line_end,
                    newline,
                    LATEST_RELEASE_DATE_FIELD,
                    date,
                ),
                None => block,
            },
        };

        block
    }
}

impl Default for Updater {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare `blocks` against the feed and rewrite the outdated ones
pub fn apply_updates(content: &str, blocks: &[ReleaseBlock], cycles: &CycleMap) -> UpdateResult {
    Updater::new().apply(content, blocks, cycles)
}

fn replace_value(text: &str, span: FieldSpan, value: &str) -> String {
    let separator = if span.value_start == span.colon_end {
        " "
    } else {
        ""
    };
    format!(
        "{}{separator}{value}{}",
        &text[..span.value_start],
        &text[span.value_end..]
    )
}

fn insert_line(text: &str, at: usize, newline: &str, field: &str, value: &str) -> String {
    format!(
        "{}{newline}{FIELD_INDENT}{field}: {value}{}",
        &text[..at],
        &text[at..]
    )
}
