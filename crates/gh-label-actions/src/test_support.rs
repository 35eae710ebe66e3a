//! Recording mock client shared by the dispatcher and controller tests

use std::sync::{Arc, Mutex};

use anyhow::bail;
use async_trait::async_trait;
use gh_label_client::{IssueClient, IssueState};
use gh_label_config::LockReason;

/// A mutation the mock client was asked to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Comment { issue: u64, body: String },
    SetState { issue: u64, state: IssueState },
    Lock { issue: u64, reason: Option<LockReason> },
    AddLabels { issue: u64, labels: Vec<String> },
}

/// Mock client recording every mutation in call order
///
/// `fetch_content` serves the configured document, or errors when none was
/// configured, which doubles as the fetch-failure case. `failing_comments`
/// makes `create_comment` record its attempt and then fail.
#[derive(Debug, Clone, Default)]
pub struct RecordingClient {
    calls: Arc<Mutex<Vec<Call>>>,
    content: Option<String>,
    fail_comments: bool,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueClient for RecordingClient {
    async fn fetch_content(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
        _git_ref: &str,
    ) -> anyhow::Result<String> {
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => bail!("no file at {}", path),
        }
    }

    async fn create_comment(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        self.record(Call::Comment {
            issue: issue_number,
            body: body.to_string(),
        });
        if self.fail_comments {
            bail!("comment rejected");
        }
        Ok(())
    }

    async fn add_labels(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> anyhow::Result<()> {
        self.record(Call::AddLabels {
            issue: issue_number,
            labels: labels.to_vec(),
        });
        Ok(())
    }

    async fn set_state(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
        state: IssueState,
    ) -> anyhow::Result<()> {
        self.record(Call::SetState {
            issue: issue_number,
            state,
        });
        Ok(())
    }

    async fn lock(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
        reason: Option<LockReason>,
    ) -> anyhow::Result<()> {
        self.record(Call::Lock {
            issue: issue_number,
            reason,
        });
        Ok(())
    }
}
