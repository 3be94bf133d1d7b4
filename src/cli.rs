//! CLI argument parsing and repository input loading for depstale

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{GithubConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::Repository;
use crate::error::ConfigError;

/// Dependency staleness auditor for GitHub organization repositories
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depstale",
    version,
    about = "Audit organization repositories for outdated dependencies"
)]
pub struct CliArgs {
    /// JSON file of repository descriptors to audit
    pub repos_file: Option<PathBuf>,

    // Content API options
    /// Organization (owner) whose repositories are audited
    #[arg(long, env = "ORG")]
    pub org: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API token for the contents endpoint (optional for public repos)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    // Single-repository mode
    /// Audit a single repository by name instead of a descriptor file
    #[arg(long)]
    pub repo: Option<String>,

    /// Repository id for --repo (keys the index document)
    #[arg(long)]
    pub id: Option<u64>,

    /// Branch ref for --repo
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Primary language for --repo (Python, Ruby, Java, JavaScript, PHP)
    #[arg(long)]
    pub language: Option<String>,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Write audit documents as JSON lines to this file
    #[arg(long, value_name = "FILE")]
    pub ndjson: Option<PathBuf>,

    /// Enable quiet mode - minimal output, no progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Content-API configuration assembled from the flags
    pub fn github_config(&self) -> GithubConfig {
        let mut config = GithubConfig::new(&self.org)
            .with_api_url(&self.api_url)
            .with_timeout(Duration::from_secs(self.timeout));
        if let Some(token) = &self.token {
            config = config.with_token(token);
        }
        config
    }

    /// Whether the progress bar should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }

    /// Resolve the repositories to audit.
    ///
    /// Either the positional descriptor file or the `--repo` flags, never
    /// both; with neither, there is nothing to audit.
    pub fn load_repositories(&self) -> Result<Vec<Repository>, ConfigError> {
        match (&self.repos_file, &self.repo) {
            (Some(path), None) => read_repos_file(path),
            (None, Some(name)) => {
                let id = self.id.ok_or_else(|| ConfigError::IncompleteRepoFlags {
                    message: "--repo requires --id".to_string(),
                })?;
                Ok(vec![Repository::new(
                    id,
                    name,
                    &self.branch,
                    self.language.clone(),
                )])
            }
            (Some(_), Some(_)) => Err(ConfigError::IncompleteRepoFlags {
                message: "pass a repository file or --repo, not both".to_string(),
            }),
            (None, None) => Err(ConfigError::NoRepositories),
        }
    }
}

/// Read a JSON array of repository descriptors
fn read_repos_file(path: &PathBuf) -> Result<Vec<Repository>, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::repos_file_read(path.clone(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| ConfigError::repos_file_parse(path.clone(), e.to_string()))
}
