//! Trigger event payload
//!
//! The action is wired to `labeled` events (`issues` or `pull_request`);
//! the payload carries the label that was just added and the item it was
//! added to. Only the fields the controller needs are decoded; everything
//! else in the payload is ignored.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Payload of a `labeled` event, reduced to what the run needs
///
/// Pull request payloads carry the item under `pull_request` instead of
/// `issue`; the number is the same either way as far as the issues API is
/// concerned, so both spellings decode into the same field.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelEvent {
    pub label: Label,
    #[serde(alias = "pull_request")]
    pub issue: Issue,
}

/// The label that triggered the event
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// The issue or pull request the label was added to
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
}

impl LabelEvent {
    /// Load and decode the payload the runner wrote to `GITHUB_EVENT_PATH`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read event payload at {}", path.display()))?;
        Self::from_json(&content)
    }

    fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Event payload is missing label or issue data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_issues_labeled_payload() {
        // Trimmed-down capture of a real issues.labeled delivery
        let payload = r#"{
            "action": "labeled",
            "issue": {
                "number": 42,
                "title": "Something is broken",
                "state": "open",
                "labels": [{ "name": "bug" }]
            },
            "label": { "name": "bug", "color": "d73a4a" },
            "repository": { "full_name": "octocat/hello-world" }
        }"#;
        let event = LabelEvent::from_json(payload).unwrap();
        assert_eq!(event.label.name, "bug");
        assert_eq!(event.issue.number, 42);
    }

    #[test]
    fn test_decode_pull_request_labeled_payload() {
        let payload = r#"{
            "action": "labeled",
            "pull_request": { "number": 7, "state": "open" },
            "label": { "name": "wontfix" }
        }"#;
        let event = LabelEvent::from_json(payload).unwrap();
        assert_eq!(event.label.name, "wontfix");
        assert_eq!(event.issue.number, 7);
    }

    #[test]
    fn test_payload_without_label_fails() {
        let payload = r#"{ "action": "opened", "issue": { "number": 1 } }"#;
        assert!(LabelEvent::from_json(payload).is_err());
    }

    #[test]
    fn test_payload_without_item_fails() {
        let payload = r#"{ "action": "labeled", "label": { "name": "bug" } }"#;
        assert!(LabelEvent::from_json(payload).is_err());
    }
}
