//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `IssueClient` trait using the octocrab
//! library. All calls go straight to the API; the runner performs each
//! mutation at most once per invocation, so there is nothing to cache.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use gh_label_config::LockReason;
use log::debug;
use octocrab::Octocrab;

use crate::client::{IssueClient, IssueState};

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with a personal or installation token
    pub fn with_token(token: String) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token)
            .build()
            .context("Failed to build GitHub client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

/// Convert our lock reason to the octocrab parameter type
fn convert_lock_reason(reason: LockReason) -> octocrab::params::LockReason {
    match reason {
        LockReason::OffTopic => octocrab::params::LockReason::OffTopic,
        LockReason::TooHeated => octocrab::params::LockReason::TooHeated,
        LockReason::Resolved => octocrab::params::LockReason::Resolved,
        LockReason::Spam => octocrab::params::LockReason::Spam,
    }
}

#[async_trait]
impl IssueClient for OctocrabClient {
    async fn fetch_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: &str,
    ) -> anyhow::Result<String> {
        debug!("Fetching {} from {}/{} @ {}", path, owner, repo, git_ref);

        let contents = self
            .octocrab
            .repos(owner, repo)
            .get_content()
            .path(path)
            .r#ref(git_ref)
            .send()
            .await
            .with_context(|| format!("Could not fetch {} from {}/{}", path, owner, repo))?;

        let file = contents
            .items
            .into_iter()
            .next()
            .with_context(|| format!("No file at {} in {}/{}", path, owner, repo))?;

        file.decoded_content()
            .with_context(|| format!("Content of {} is not valid UTF-8", path))
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        debug!("Commenting on {}/{}#{}", owner, repo, issue_number);

        self.octocrab
            .issues(owner, repo)
            .create_comment(issue_number, body)
            .await?;
        Ok(())
    }

    async fn add_labels(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> anyhow::Result<()> {
        debug!(
            "Adding {} label(s) to {}/{}#{}",
            labels.len(),
            owner,
            repo,
            issue_number
        );

        self.octocrab
            .issues(owner, repo)
            .add_labels(issue_number, labels)
            .await?;
        Ok(())
    }

    async fn set_state(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        state: IssueState,
    ) -> anyhow::Result<()> {
        debug!(
            "Setting {}/{}#{} state to {}",
            owner,
            repo,
            issue_number,
            state.as_str()
        );

        let issues = self.octocrab.issues(owner, repo);
        let update = issues.update(issue_number);
        let update = match state {
            IssueState::Open => update.state(octocrab::models::IssueState::Open),
            IssueState::Closed => update.state(octocrab::models::IssueState::Closed),
        };
        update.send().await?;
        Ok(())
    }

    async fn lock(
        &self,
        owner: &str,
        repo: &str,
        issue_number: u64,
        reason: Option<LockReason>,
    ) -> anyhow::Result<()> {
        debug!(
            "Locking {}/{}#{} (reason: {:?})",
            owner, repo, issue_number, reason
        );

        self.octocrab
            .issues(owner, repo)
            .lock(issue_number, reason.map(convert_lock_reason))
            .await?;
        Ok(())
    }
}
