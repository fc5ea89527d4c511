//! Input file test utilities

use std::path::PathBuf;

use eol_sync::config::RunConfig;
use tempfile::TempDir;

/// Registry document with three release cycles
pub const DOCUMENT: &str = r#"---
title: Palo Alto Networks GlobalProtect App
category: app
iconSlug: paloaltonetworks
permalink: /pan-gp
releasePolicyLink: https://www.paloaltonetworks.com/services/support/end-of-life-announcements/end-of-life-summary
changelogTemplate: https://docs.paloaltonetworks.com/globalprotect/__RELEASE_CYCLE__/globalprotect-app-release-notes

releases:
  - releaseCycle: "6.3"
    releaseDate: 2024-06-10
    eol: 2026-12-31
    latest: "6.3.2"
    latestReleaseDate: 2025-11-01

  - releaseCycle: "6.2"
    releaseDate: 2023-05-23
    eol: 2025-11-30
    latest: "6.2.8-c263"
    latestReleaseDate: 2025-06-04

  - releaseCycle: "6.1"
    releaseDate: 2022-11-02
    eol: 2024-12-31
    latest: "6.1.5"

---

> [GlobalProtect](https://www.paloaltonetworks.com/sase/globalprotect) secures remote access.
"#;

/// Encode text as UTF-16 LE with a byte-order mark, like vendor exports
pub fn utf16_le(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Build a feed array from `(version, released-on)` pairs
pub fn feed_json(records: &[(&str, &str)]) -> String {
    let records: Vec<serde_json::Value> = records
        .iter()
        .map(|(version, released_on)| {
            serde_json::json!({
                "version": version,
                "released-on": released_on,
                "platform": "windows",
            })
        })
        .collect();
    serde_json::to_string_pretty(&records).unwrap()
}

/// Temporary directory holding a feed and a document
pub struct Workspace {
    pub dir: TempDir,
    pub config: RunConfig,
}

impl Workspace {
    pub fn new(feed: &[u8], document: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = RunConfig {
            feed_path: dir.path().join("GlobalProtectVersions.json"),
            document_path: dir.path().join("pan-gp.md"),
            output_path: dir.path().join("pan-gp.updated.md"),
        };
        std::fs::write(&config.feed_path, feed).unwrap();
        std::fs::write(&config.document_path, document).unwrap();
        Self { dir, config }
    }

    pub fn output(&self) -> Option<String> {
        std::fs::read_to_string(&self.config.output_path).ok()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
