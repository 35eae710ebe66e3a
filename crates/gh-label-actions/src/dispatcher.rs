//! Applies one action record against one issue
//!
//! Effects run in a fixed order: comment, close, reopen, lock, labels.
//! Each effect is guarded only by its own field and is a separate API
//! call. A failed call is logged and the remaining effects still run;
//! afterwards the dispatcher reports how many calls failed so the
//! invocation terminates as failed.

use gh_label_client::{IssueClient, IssueState};
use gh_label_config::LabelAction;
use log::{debug, error};
use thiserror::Error;

/// One or more effects failed while the rest were still attempted
#[derive(Debug, Error)]
#[error("{failed} of {attempted} effect(s) failed for issue #{issue_number}")]
pub struct DispatchError {
    pub failed: usize,
    pub attempted: usize,
    pub issue_number: u64,
}

/// Apply every configured effect of `action` to `owner/repo#issue_number`
pub async fn apply(
    client: &dyn IssueClient,
    owner: &str,
    repo: &str,
    issue_number: u64,
    action: &LabelAction,
) -> Result<(), DispatchError> {
    let mut attempted = 0usize;
    let mut failed = 0usize;

    if let Some(comment) = action.comment.as_deref().filter(|body| !body.is_empty()) {
        attempted += 1;
        if let Err(e) = client.create_comment(owner, repo, issue_number, comment).await {
            error!(
                "Could not add comment to {}/{}#{}: {:#}",
                owner, repo, issue_number, e
            );
            failed += 1;
        }
    }

    if action.close {
        attempted += 1;
        if let Err(e) = client
            .set_state(owner, repo, issue_number, IssueState::Closed)
            .await
        {
            error!("Could not close {}/{}#{}: {:#}", owner, repo, issue_number, e);
            failed += 1;
        }
    }

    if action.reopen {
        attempted += 1;
        if let Err(e) = client
            .set_state(owner, repo, issue_number, IssueState::Open)
            .await
        {
            error!(
                "Could not re-open {}/{}#{}: {:#}",
                owner, repo, issue_number, e
            );
            failed += 1;
        }
    }

    if action.lock {
        attempted += 1;
        if let Err(e) = client
            .lock(owner, repo, issue_number, action.lock_reason)
            .await
        {
            error!("Could not lock {}/{}#{}: {:#}", owner, repo, issue_number, e);
            failed += 1;
        }
    }

    if !action.labels.is_empty() {
        attempted += 1;
        if let Err(e) = client
            .add_labels(owner, repo, issue_number, &action.labels)
            .await
        {
            error!(
                "Could not add labels to {}/{}#{}: {:#}",
                owner, repo, issue_number, e
            );
            failed += 1;
        }
    }

    if attempted == 0 {
        debug!(
            "Action for {}/{}#{} configures no effects",
            owner, repo, issue_number
        );
    }

    if failed > 0 {
        Err(DispatchError {
            failed,
            attempted,
            issue_number,
        })
    } else {
        Ok(())
    }
}
