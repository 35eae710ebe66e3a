//! GitHub Actions environment and inputs
//!
//! The Actions runner exposes each `with:` input as an `INPUT_<NAME>` env
//! var (name uppercased, spaces replaced with underscores) and the event
//! metadata via `GITHUB_*` vars. Everything one invocation needs is read
//! here once, so the controller works on plain values.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Repo path of the configuration document when the input is not set
const DEFAULT_CONFIG_PATH: &str = ".github/label-actions.yml";

/// Everything one invocation needs from the environment
#[derive(Debug, Clone)]
pub struct RunContext {
    pub owner: String,
    pub repo: String,
    /// Commit the configuration document is read at
    pub sha: String,
    /// Path of the event payload JSON written by the runner
    pub event_path: PathBuf,
    /// Repo path of the configuration document
    pub config_path: String,
    /// False selects dry-run: matched actions are logged, not applied
    pub perform: bool,
}

impl RunContext {
    /// Capture the run context from the Actions environment
    pub fn from_env() -> Result<Self> {
        let repository = env::var("GITHUB_REPOSITORY").context("GITHUB_REPOSITORY is not set")?;
        let (owner, repo) = repository.split_once('/').with_context(|| {
            format!("GITHUB_REPOSITORY should be owner/repo, got '{}'", repository)
        })?;
        let sha = env::var("GITHUB_SHA").context("GITHUB_SHA is not set")?;
        let event_path = env::var("GITHUB_EVENT_PATH").context("GITHUB_EVENT_PATH is not set")?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            sha,
            event_path: PathBuf::from(event_path),
            config_path: input("configuration-path")
                .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
            perform: parse_flag(input("perform").as_deref()),
        })
    }
}

/// Read an action input, treating unset and empty the same way
fn input(name: &str) -> Option<String> {
    env::var(input_key(name)).ok().filter(|value| !value.is_empty())
}

/// Env var name the runner uses for an action input
fn input_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Strict boolean parsing for the perform flag; anything unrecognized keeps
/// the dry-run default
fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim).map(str::to_lowercase).as_deref(),
        Some("true" | "1" | "yes")
    )
}
