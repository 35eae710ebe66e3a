//! Label-action configuration
//!
//! This crate provides:
//! - The validated action record for one label (`LabelAction`)
//! - The lock reasons the platform accepts (`LockReason`)
//! - The resolver turning a YAML document into a label→action map

pub mod action;
pub mod error;
pub mod resolver;

pub use action::{LabelAction, LockReason};
pub use error::ConfigError;
pub use resolver::{parse_label_actions, resolve, LabelActionMap};
