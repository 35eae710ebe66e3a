//! Issue client trait
//!
//! Defines the interface the action dispatcher and run controller need:
//! the mutations applied to an issue plus the contents lookup used to load
//! the configuration document.

use async_trait::async_trait;
use gh_label_config::LockReason;

/// Target state for an issue state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    /// The string the REST API expects
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

/// GitHub issue API client
///
/// Implementations must be `Send + Sync` so a client handle can be passed
/// into async code freely. Pull requests are issues as far as these
/// endpoints are concerned, so the same calls cover both.
#[async_trait]
pub trait IssueClient: Send + Sync {
    /// Fetch a file from the repository at the given ref, UTF-8 decoded
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `path` - File path relative to the repository root
    /// * `git_ref` - Commit SHA or ref to read the file at
    async fn fetch_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: &str,
    ) -> anyhow::Result<String>;

    /// Post a new comment on the issue
    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> anyhow::Result<()>;

    /// Attach labels to the issue in a single call
    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> anyhow::Result<()>;

    /// Transition the issue to the given state
    async fn set_state(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        state: IssueState,
    ) -> anyhow::Result<()>;

    /// Lock the issue, with a reason when one is configured
    async fn lock(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        reason: Option<LockReason>,
    ) -> anyhow::Result<()>;
}
