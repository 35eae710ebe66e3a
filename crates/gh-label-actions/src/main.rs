//! Entry point for the label-actions runner
//!
//! Reads the GitHub Actions environment, builds the API client, and runs
//! one label event through the controller. Any failure is logged and maps
//! to a non-zero exit status so the workflow step shows as failed.

use std::process::ExitCode;

use gh_label_client::{OctocrabClient, TokenResolver};

mod context;
mod controller;
mod dispatcher;
mod event;
#[cfg(test)]
mod test_support;

use context::RunContext;
use event::LabelEvent;

#[tokio::main]
async fn main() -> ExitCode {
    // Local runs can keep the token and event path in a .env file
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let ctx = RunContext::from_env()?;
    let event = LabelEvent::load(&ctx.event_path)?;

    let token = TokenResolver::new().get_token().await?;
    let client = OctocrabClient::with_token(token)?;

    controller::handle(&client, &ctx, &event).await
}
