//! One label event, end to end
//!
//! Loads the configuration document at the triggering commit, resolves it,
//! looks up the added label, and either applies the matched action or (in
//! dry-run) reports what would have happened. A label with no entry is a
//! successful no-op.

use anyhow::{Context, Result};
use gh_label_client::IssueClient;
use gh_label_config::parse_label_actions;
use log::{debug, info};

use crate::context::RunContext;
use crate::dispatcher;
use crate::event::LabelEvent;

pub async fn handle(
    client: &dyn IssueClient,
    ctx: &RunContext,
    event: &LabelEvent,
) -> Result<()> {
    let label = event.label.name.as_str();
    let issue_number = event.issue.number;
    debug!("Label added: {}", label);

    debug!("Loading config at {}", ctx.config_path);
    let content = client
        .fetch_content(&ctx.owner, &ctx.repo, &ctx.config_path, &ctx.sha)
        .await
        .context("Could not fetch the label-actions configuration")?;
    let actions =
        parse_label_actions(&content).context("Could not resolve the label-actions configuration")?;

    let Some(action) = actions.get(label) else {
        debug!("Ignoring label {}, no action found in config", label);
        return Ok(());
    };

    if !ctx.perform {
        info!(
            "{}/{}#{} would have been actioned on (dry-run)",
            ctx.owner, ctx.repo, issue_number
        );
        return Ok(());
    }

    info!(
        "{}/{}#{} performing action for label {}",
        ctx.owner, ctx.repo, issue_number, label
    );
    dispatcher::apply(client, &ctx.owner, &ctx.repo, issue_number, action).await?;
    Ok(())
}
