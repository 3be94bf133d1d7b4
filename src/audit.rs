//! Audit orchestrator for repository dependency freshness
//!
//! This module provides:
//! - Per-repository workflow: resolve ecosystem, fetch manifest, parse
//!   declarations, resolve latest versions, count stale
//! - Batch driver over a repository list with progress display
//! - Error handling with per-dependency isolation: one failed lookup never
//!   aborts the rest of the audit

use tracing::{debug, warn};

use crate::config::GithubConfig;
use crate::domain::{AuditResult, Lookup, Repository};
use crate::error::AppError;
use crate::github::ContentClient;
use crate::manifest::get_parser;
use crate::progress::Progress;
use crate::registry::{create_adapter, Endpoints, HttpClient};
use crate::staleness;

/// Orchestrator for repository dependency audits
pub struct Auditor {
    /// Contents client for manifest retrieval
    github: ContentClient,
    /// HTTP client shared by the registry adapters
    http: HttpClient,
    /// Registry base URLs
    endpoints: Endpoints,
}

impl Auditor {
    /// Create a new auditor from configuration
    pub fn new(config: &GithubConfig) -> Result<Self, AppError> {
        let github = ContentClient::new(config)?;
        let http = HttpClient::with_timeout(config.timeout)?;

        Ok(Self {
            github,
            http,
            endpoints: Endpoints::default(),
        })
    }

    /// Override the registry base URLs (mirrors, tests)
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Audit one repository, producing its stale-dependency count.
    ///
    /// Never fails: an unrecognized language, an absent manifest, and a
    /// registry problem each degrade to a count of zero for the affected
    /// scope. A repository outside the supported languages is answered
    /// without any network traffic.
    pub async fn audit(&self, repository: &Repository) -> AuditResult {
        let Some(ecosystem) = repository.ecosystem() else {
            debug!(
                repo = %repository.name,
                language = ?repository.language,
                "language not audited"
            );
            return AuditResult::empty(repository);
        };

        let filename = ecosystem.manifest_filename();
        let manifest = match self
            .github
            .fetch(&repository.name, &repository.branch, filename)
            .await
        {
            Lookup::Found(manifest) => manifest,
            Lookup::NotFound => {
                debug!(repo = %repository.name, file = filename, "manifest absent");
                return AuditResult::empty(repository);
            }
            Lookup::Failed(reason) => {
                warn!(repo = %repository.name, file = filename, reason, "manifest fetch failed");
                return AuditResult::empty(repository);
            }
        };

        let declarations = get_parser(ecosystem).parse(&manifest);
        let adapter = create_adapter(ecosystem, self.http.clone(), &self.endpoints);

        let mut stale = 0usize;
        for declaration in &declarations {
            // One lookup at a time; a dependency with an unknown latest
            // version yields no verdict and is not counted.
            let latest = adapter.latest_version(&declaration.name).await;
            if let Some(verdict) = staleness::judge(declaration, &latest) {
                if verdict.stale {
                    debug!(
                        repo = %repository.name,
                        dependency = %verdict.name,
                        declared = %declaration.requirement,
                        "stale dependency"
                    );
                    stale += 1;
                }
            }
        }

        AuditResult::new(repository.id, repository.name.clone(), stale)
    }

    /// Audit a batch of repositories strictly in sequence
    pub async fn audit_all(
        &self,
        repositories: &[Repository],
        show_progress: bool,
    ) -> Vec<AuditResult> {
        let mut progress = Progress::new(show_progress);
        progress.start(repositories.len() as u64, "Auditing repositories");

        let mut results = Vec::with_capacity(repositories.len());
        for repository in repositories {
            progress.set_message(&format!("Auditing {}", repository.name));
            results.push(self.audit(repository).await);
            progress.inc();
        }

        progress.finish_and_clear();
        results
    }
}
