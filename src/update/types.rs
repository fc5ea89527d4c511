//! Common types for document updates

use std::fmt;

/// A release cycle whose `latest` version was bumped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub cycle: String,
    /// Version recorded before the update, `None` if the block had none
    pub previous: Option<String>,
    pub current: String,
}

impl Change {
    pub fn new(cycle: impl Into<String>, previous: Option<String>, current: impl Into<String>) -> Self {
        Self {
            cycle: cycle.into(),
            previous,
            current: current.into(),
        }
    }
}

/// Renders as `6.3: 6.3.2 -> 6.3.3-c842`
impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.cycle,
            self.previous.as_deref().unwrap_or_default(),
            self.current
        )
    }
}

/// Updated document text and the changes that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub content: String,
    /// Changes in processing order (last block of the document first)
    pub changes: Vec<Change>,
}

impl UpdateResult {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_displays_previous_and_current_version() {
        let change = Change::new("6.3", Some("6.3.2".to_string()), "6.3.3-c842");
        assert_eq!(change.to_string(), "6.3: 6.3.2 -> 6.3.3-c842");
    }

    #[test]
    fn change_displays_empty_previous_when_missing() {
        let change = Change::new("6.3", None, "6.3.3");
        assert_eq!(change.to_string(), "6.3:  -> 6.3.3");
    }
}
