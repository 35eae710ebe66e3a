//! Token resolution for the GitHub client
//!
//! Tries multiple sources in order:
//! 1. The `repo-token` action input (`INPUT_REPO-TOKEN` in the runner env)
//! 2. Generic `GITHUB_TOKEN` or `GH_TOKEN`
//! 3. `gh auth token` from a local gh CLI login (useful for local dry-runs)

use anyhow::{Context, Result};
use log::debug;

/// Env var the Actions runner sets for the `repo-token` input
const INPUT_REPO_TOKEN: &str = "INPUT_REPO-TOKEN";

/// Resolves the API token the client authenticates with
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Cached default token from GITHUB_TOKEN/GH_TOKEN
    default_token: Option<String>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a new token resolver
    pub fn new() -> Self {
        let default_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok()
            .filter(|token| !token.is_empty());

        Self { default_token }
    }

    /// Get a token for the API
    ///
    /// # Token Resolution Order
    ///
    /// 1. The `repo-token` action input
    /// 2. `GITHUB_TOKEN` or `GH_TOKEN`
    /// 3. `gh auth token` (local development)
    pub async fn get_token(&self) -> Result<String> {
        if let Ok(token) = std::env::var(INPUT_REPO_TOKEN) {
            if !token.is_empty() {
                debug!("Using token from the repo-token input");
                return Ok(token);
            }
        }

        if let Some(ref token) = self.default_token {
            debug!("Using token from GITHUB_TOKEN/GH_TOKEN");
            return Ok(token.clone());
        }

        // Local fallback: ask the gh CLI
        debug!("Trying gh auth token");
        let output = tokio::process::Command::new("gh")
            .args(["auth", "token"])
            .output()
            .await
            .context("Failed to run 'gh auth token'")?;

        if output.status.success() {
            let token = String::from_utf8(output.stdout)
                .context("Invalid UTF-8 in gh auth token output")?
                .trim()
                .to_string();
            if !token.is_empty() {
                debug!("Using token from gh CLI");
                return Ok(token);
            }
        }

        Err(anyhow::anyhow!(
            "No token found. Set the repo-token input, GITHUB_TOKEN, \
             or run 'gh auth login'"
        ))
    }
}
