//! Action record for one configured label

use std::fmt;

/// Reason attached when locking an issue
///
/// The four reasons the REST API accepts. `as_str` returns the exact wire
/// spelling, including the space in `"too heated"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    OffTopic,
    TooHeated,
    Resolved,
    Spam,
}

impl LockReason {
    /// All accepted reasons, in documentation order
    pub const ALL: [LockReason; 4] = [
        LockReason::OffTopic,
        LockReason::TooHeated,
        LockReason::Resolved,
        LockReason::Spam,
    ];

    /// The string the REST API expects
    pub fn as_str(&self) -> &'static str {
        match self {
            LockReason::OffTopic => "off-topic",
            LockReason::TooHeated => "too heated",
            LockReason::Resolved => "resolved",
            LockReason::Spam => "spam",
        }
    }

    /// Parse the config-document spelling of a reason
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.as_str() == value)
    }
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything configured to happen when one label is added
///
/// Every field has a default, so an empty mapping under a label is a valid
/// (no-op) entry. `close` and `reopen` are independent flags and may both be
/// set; the dispatcher applies them in its fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAction {
    /// Comment body to post; absent or empty means no comment
    pub comment: Option<String>,
    /// Transition the issue to closed
    pub close: bool,
    /// Transition the issue to open
    pub reopen: bool,
    /// Lock the issue against further interaction
    pub lock: bool,
    /// Reason attached to the lock call; only meaningful when `lock` is set
    pub lock_reason: Option<LockReason>,
    /// Additional labels to attach, in document order
    pub labels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_reason_wire_strings() {
        assert_eq!(LockReason::OffTopic.as_str(), "off-topic");
        assert_eq!(LockReason::TooHeated.as_str(), "too heated");
        assert_eq!(LockReason::Resolved.as_str(), "resolved");
        assert_eq!(LockReason::Spam.as_str(), "spam");
    }

    #[test]
    fn test_lock_reason_parse_round_trip() {
        for reason in LockReason::ALL {
            assert_eq!(LockReason::parse(reason.as_str()), Some(reason));
        }
    }

    #[test]
    fn test_lock_reason_parse_rejects_unknown() {
        assert_eq!(LockReason::parse("too-heated"), None);
        assert_eq!(LockReason::parse("hilarious"), None);
        assert_eq!(LockReason::parse(""), None);
    }

    #[test]
    fn test_label_action_defaults() {
        let action = LabelAction::default();
        assert_eq!(action.comment, None);
        assert!(!action.close);
        assert!(!action.reopen);
        assert!(!action.lock);
        assert_eq!(action.lock_reason, None);
        assert!(action.labels.is_empty());
    }
}
