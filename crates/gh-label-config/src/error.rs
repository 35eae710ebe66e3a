//! Errors produced while resolving the configuration document

use thiserror::Error;

/// Errors that can occur while turning the raw document into a label→action map
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML at all.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// The document root is not a mapping of label names.
    #[error("configuration root should be a mapping of label names")]
    NotAMapping,

    /// The value under a label is not a mapping of options.
    #[error("found unexpected type for label {label} (should be a mapping of options)")]
    EntryNotAMapping { label: String },

    /// A recognized option carries a value of the wrong type.
    #[error("found unexpected type for {option} in label {label} (should be {expected})")]
    Schema {
        label: String,
        option: String,
        expected: &'static str,
    },

    /// `lockReason` is a string, but not one the platform accepts.
    #[error(
        "unknown lock reason '{reason}' in label {label} \
         (should be one of: off-topic, too heated, resolved, spam)"
    )]
    UnknownLockReason { label: String, reason: String },
}
