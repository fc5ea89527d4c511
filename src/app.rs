//! One reconciliation run: read both inputs, update, write the result

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::RunConfig;
use crate::parser::ReleaseCycleParser;
use crate::update::{Change, apply_updates};
use crate::version::error::FeedError;
use crate::version::feed::load_feed;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document {path:?} is not valid UTF-8")]
    InvalidDocument { path: PathBuf },

    #[error("Failed to load feed {path:?}: {source}")]
    Feed {
        path: PathBuf,
        #[source]
        source: FeedError,
    },
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every release cycle is current; nothing was written
    NoUpdates,
    /// The output file was written with these changes
    Updated(Vec<Change>),
}

/// Reconcile the registry document with the feed.
///
/// The output file is only written when at least one block changed.
pub fn run(config: &RunConfig) -> Result<RunOutcome, RunError> {
    let feed_bytes = read(&config.feed_path)?;
    let cycles = load_feed(&feed_bytes).map_err(|source| RunError::Feed {
        path: config.feed_path.clone(),
        source,
    })?;
    info!("Feed {:?} lists {} release cycles", config.feed_path, cycles.len());

    let content = String::from_utf8(read(&config.document_path)?).map_err(|_| {
        RunError::InvalidDocument {
            path: config.document_path.clone(),
        }
    })?;

    let blocks = ReleaseCycleParser::new().parse(&content);
    let result = apply_updates(&content, &blocks, &cycles);

    if !result.has_changes() {
        info!("No release cycle needs an update");
        return Ok(RunOutcome::NoUpdates);
    }

    std::fs::write(&config.output_path, &result.content).map_err(|source| RunError::Write {
        path: config.output_path.clone(),
        source,
    })?;
    info!(
        "Wrote {} updates to {:?}",
        result.changes.len(),
        config.output_path
    );

    Ok(RunOutcome::Updated(result.changes))
}

fn read(path: &Path) -> Result<Vec<u8>, RunError> {
    std::fs::read(path).map_err(|source| RunError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FEED: &str = r#"[
        {"version": "6.3.3-c842", "released-on": "2025/12/17 00:00:00"},
        {"version": "6.3.2", "released-on": "2025/11/01 00:00:00"}
    ]"#;

    const DOCUMENT: &str = r#"---
releases:
  - releaseCycle: "6.3"
    latest: "6.3.2"
    latestReleaseDate: 2025-11-01
---
"#;

    fn setup(feed: &str, document: &[u8]) -> (TempDir, RunConfig) {
        let temp_dir = TempDir::new().unwrap();
        let config = RunConfig {
            feed_path: temp_dir.path().join("versions.json"),
            document_path: temp_dir.path().join("pan-gp.md"),
            output_path: temp_dir.path().join("out.md"),
        };
        std::fs::write(&config.feed_path, feed).unwrap();
        std::fs::write(&config.document_path, document).unwrap();
        (temp_dir, config)
    }

    #[test]
    fn run_writes_output_when_updates_found() {
        let (_temp_dir, config) = setup(FEED, DOCUMENT.as_bytes());

        let outcome = run(&config).unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Updated(vec![Change::new(
                "6.3",
                Some("6.3.2".to_string()),
                "6.3.3-c842"
            )])
        );
        let written = std::fs::read_to_string(&config.output_path).unwrap();
        assert!(written.contains("    latest: \"6.3.3-c842\"\n    latestReleaseDate: 2025-12-17\n"));
    }

    #[test]
    fn run_does_not_write_output_without_updates() {
        let feed = r#"[{"version": "6.3.2", "released-on": "2025/11/01 00:00:00"}]"#;
        let (_temp_dir, config) = setup(feed, DOCUMENT.as_bytes());

        assert_eq!(run(&config).unwrap(), RunOutcome::NoUpdates);
        assert!(!config.output_path.exists());
    }

    #[test]
    fn run_fails_on_missing_feed() {
        let (_temp_dir, mut config) = setup(FEED, DOCUMENT.as_bytes());
        config.feed_path = config.feed_path.with_file_name("missing.json");

        assert!(matches!(run(&config), Err(RunError::Read { .. })));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn run_fails_on_malformed_feed() {
        let (_temp_dir, config) = setup("{", DOCUMENT.as_bytes());

        let result = run(&config);
        assert!(matches!(
            result,
            Err(RunError::Feed {
                source: FeedError::Json(_),
                ..
            })
        ));
    }

    #[test]
    fn run_fails_on_non_utf8_document() {
        let (_temp_dir, config) = setup(FEED, &[0xFF, 0xFE, 0x00]);

        assert!(matches!(
            run(&config),
            Err(RunError::InvalidDocument { .. })
        ));
    }
}
