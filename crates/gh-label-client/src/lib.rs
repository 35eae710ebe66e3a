//! GitHub issue API client
//!
//! This crate provides a trait-based client for the handful of issue
//! operations the label runner performs, so the dispatcher and controller
//! can be exercised against a recording mock in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────┐
//! │            IssueClient trait          │
//! │  - fetch_content()                    │
//! │  - create_comment()                   │
//! │  - add_labels()                       │
//! │  - set_state()                        │
//! │  - lock()                             │
//! └───────────────────────────────────────┘
//!                    │
//!                    ▼
//!          ┌──────────────────┐
//!          │  OctocrabClient  │
//!          │  (direct API)    │
//!          └──────────────────┘
//! ```

pub mod client;
pub mod octocrab_client;
pub mod token;

pub use client::{IssueClient, IssueState};
pub use octocrab_client::OctocrabClient;
pub use token::TokenResolver;

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
