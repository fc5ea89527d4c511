//! Vendor version feed loader
//!
//! The feed is a JSON array of release records, e.g.
//!
//! ```text
//! [
//!   {"version": "6.3.3-c842", "released-on": "2025/12/17 00:00:00"},
//!   {"version": "6.3.2", "released-on": "2025/11/01 00:00:00"}
//! ]
//! ```
//!
//! Vendor exports are frequently saved as UTF-16 with a byte-order mark, so
//! the raw bytes are sniffed before JSON parsing.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use encoding_rs::{Encoding, UTF_8};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::config::FEED_DATE_FORMAT;
use crate::version::error::FeedError;
use crate::version::release::{ReleaseVersion, release_cycle};
use crate::version::types::{CycleMap, LatestRelease};

/// One record of the vendor feed
#[derive(Debug, Deserialize)]
struct FeedRecord {
    version: String,
    #[serde(rename = "released-on")]
    released_on: String,
}

/// Decode raw feed bytes, honouring a UTF-16 LE/BE or UTF-8 byte-order mark.
/// Without a mark the bytes must be UTF-8.
pub fn decode_feed(bytes: &[u8]) -> Result<Cow<'_, str>, FeedError> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    debug!(encoding = encoding.name(), "Decoding version feed");

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .ok_or(FeedError::Encoding {
            encoding: encoding.name(),
        })
}

/// Parse feed JSON and keep the newest release of every release cycle.
///
/// Records whose version does not parse, or has no release cycle, are
/// skipped. When two records of a cycle carry the same version, the first one
/// wins.
pub fn parse_feed(json: &str) -> Result<CycleMap, FeedError> {
    let records: Vec<FeedRecord> = serde_json::from_str(json)?;

    let mut newest: IndexMap<String, (ReleaseVersion, LatestRelease)> = IndexMap::new();

    for record in records {
        let Some(parsed) = ReleaseVersion::parse(&record.version) else {
            trace!(version = %record.version, "Skipping unrecognized feed version");
            continue;
        };
        let Some(cycle) = release_cycle(&record.version) else {
            continue;
        };

        let released_on = parse_release_date(&record.released_on)?;

        match newest.entry(cycle.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert((parsed, LatestRelease::new(record.version, released_on)));
            }
            Entry::Occupied(mut slot) => {
                if parsed > slot.get().0 {
                    slot.insert((parsed, LatestRelease::new(record.version, released_on)));
                }
            }
        }
    }

    debug!(cycles = newest.len(), "Loaded version feed");

    Ok(newest
        .into_iter()
        .map(|(cycle, (_, release))| (cycle, release))
        .collect())
}

/// Decode and parse a feed in one step
pub fn load_feed(bytes: &[u8]) -> Result<CycleMap, FeedError> {
    let json = decode_feed(bytes)?;
    parse_feed(&json)
}

fn parse_release_date(value: &str) -> Result<NaiveDate, FeedError> {
    NaiveDateTime::parse_from_str(value, FEED_DATE_FORMAT)
        .map(|datetime| datetime.date())
        .map_err(|source| FeedError::InvalidDate {
            value: value.to_string(),
            source,
        })
}
