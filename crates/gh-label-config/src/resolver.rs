//! Turns the raw configuration document into a label→action map
//!
//! Every top-level key is a label name; the value under it is a mapping of
//! recognized options. Recognized options are validated strictly against
//! their schema type and a single mismatch fails the whole resolution.
//! Unrecognized option names are ignored, so documents written for newer
//! versions still load.

use std::collections::HashMap;

use serde_yaml::Value;

use crate::action::{LabelAction, LockReason};
use crate::error::ConfigError;

/// Map from label name to its configured action record
pub type LabelActionMap = HashMap<String, LabelAction>;

/// Parse a YAML document and resolve it into a label→action map
pub fn parse_label_actions(content: &str) -> Result<LabelActionMap, ConfigError> {
    let doc: Value = serde_yaml::from_str(content)?;
    resolve(&doc)
}

/// Resolve an already-parsed document tree
///
/// Resolution is deterministic: the same tree always yields a structurally
/// identical map, and no field of any record is left without its default.
pub fn resolve(doc: &Value) -> Result<LabelActionMap, ConfigError> {
    // An empty document parses as null; treat it as "no labels configured".
    if doc.is_null() {
        return Ok(LabelActionMap::new());
    }
    let root = doc.as_mapping().ok_or(ConfigError::NotAMapping)?;

    let mut map = LabelActionMap::new();
    for (key, entry) in root {
        let label = key.as_str().ok_or(ConfigError::NotAMapping)?;
        let action = resolve_entry(label, entry)?;
        map.insert(label.to_string(), action);
    }

    log::debug!("Resolved actions for {} label(s)", map.len());
    Ok(map)
}

fn resolve_entry(label: &str, entry: &Value) -> Result<LabelAction, ConfigError> {
    let options = entry.as_mapping().ok_or_else(|| ConfigError::EntryNotAMapping {
        label: label.to_string(),
    })?;

    let mut action = LabelAction::default();
    for (name, value) in options {
        let Some(name) = name.as_str() else {
            continue;
        };
        match name {
            "comment" => action.comment = Some(expect_string(label, "comment", value)?),
            "close" => action.close = expect_bool(label, "close", value)?,
            "reopen" => action.reopen = expect_bool(label, "reopen", value)?,
            "lock" => action.lock = expect_bool(label, "lock", value)?,
            "lockReason" => {
                let reason = expect_string(label, "lockReason", value)?;
                let reason = LockReason::parse(&reason).ok_or_else(|| {
                    ConfigError::UnknownLockReason {
                        label: label.to_string(),
                        reason,
                    }
                })?;
                action.lock_reason = Some(reason);
            }
            "labels" => action.labels = expect_string_seq(label, "labels", value)?,
            _ => log::debug!("Ignoring unrecognized option {} for label {}", name, label),
        }
    }

    Ok(action)
}

fn expect_string(label: &str, option: &str, value: &Value) -> Result<String, ConfigError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| schema(label, option, "string"))
}

fn expect_bool(label: &str, option: &str, value: &Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| schema(label, option, "boolean"))
}

fn expect_string_seq(label: &str, option: &str, value: &Value) -> Result<Vec<String>, ConfigError> {
    let seq = value
        .as_sequence()
        .ok_or_else(|| schema(label, option, "array of strings"))?;
    seq.iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| schema(label, option, "array of strings"))
        })
        .collect()
}

fn schema(label: &str, option: &str, expected: &'static str) -> ConfigError {
    ConfigError::Schema {
        label: label.to_string(),
        option: option.to_string(),
        expected,
    }
}
