//! Registry adapters for resolving latest package versions
//!
//! This module provides:
//! - HTTP client shared foundation (no retries, lookups are best-effort)
//! - PyPI JSON API adapter
//! - RubyGems API adapter
//! - Maven Central search adapter
//! - npm registry adapter
//! - Packagist metadata adapter

mod client;
mod maven_central;
mod npm;
mod packagist;
mod pypi;
mod rubygems;

pub use client::HttpClient;
pub use maven_central::MavenCentralAdapter;
pub use npm::NpmAdapter;
pub use packagist::PackagistAdapter;
pub use pypi::PyPIAdapter;
pub use rubygems::RubyGemsAdapter;

use crate::domain::{Ecosystem, Lookup};
use crate::error::RegistryError;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Trait for registry adapters.
///
/// `latest_version` never raises into the caller; transport and decode
/// failures come back as `Lookup` variants so the audit can degrade to
/// "unknown" without aborting.
#[async_trait]
pub trait RegistryAdapter: Send + Sync {
    /// Get the ecosystem this adapter handles
    fn ecosystem(&self) -> Ecosystem;

    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Resolve the latest published version of a package
    async fn latest_version(&self, package: &str) -> Lookup<String>;
}

/// Base URLs for the five registries.
///
/// Defaults are the public endpoints; tests and mirror setups override
/// individual fields.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// PyPI JSON API base
    pub pypi: String,
    /// RubyGems API base
    pub rubygems: String,
    /// Maven Central search endpoint
    pub maven: String,
    /// npm registry base
    pub npm: String,
    /// Packagist p2 metadata base
    pub packagist: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            pypi: pypi::PYPI_API_URL.to_string(),
            rubygems: rubygems::RUBYGEMS_API_URL.to_string(),
            maven: maven_central::MAVEN_SEARCH_URL.to_string(),
            npm: npm::NPM_REGISTRY_URL.to_string(),
            packagist: packagist::PACKAGIST_API_URL.to_string(),
        }
    }
}

/// Collapse a typed registry outcome into a lookup.
///
/// Keeps not-found apart from transport failures and logs each at its own
/// level; the caller only sees the `Lookup`.
pub(crate) fn into_lookup(
    result: Result<String, RegistryError>,
    package: &str,
    registry: &str,
) -> Lookup<String> {
    match result {
        Ok(version) => Lookup::Found(version),
        Err(RegistryError::PackageNotFound { .. }) => {
            debug!(package, registry, "package not found");
            Lookup::NotFound
        }
        Err(e) => {
            warn!(package, registry, error = %e, "version lookup failed");
            Lookup::failed(e.to_string())
        }
    }
}

/// Create a registry adapter for the given ecosystem
pub fn create_adapter(
    ecosystem: Ecosystem,
    client: HttpClient,
    endpoints: &Endpoints,
) -> Box<dyn RegistryAdapter> {
    match ecosystem {
        Ecosystem::Python => Box::new(PyPIAdapter::with_base_url(client, &endpoints.pypi)),
        Ecosystem::Ruby => Box::new(RubyGemsAdapter::with_base_url(client, &endpoints.rubygems)),
        Ecosystem::Java => Box::new(MavenCentralAdapter::with_base_url(client, &endpoints.maven)),
        Ecosystem::JavaScript => Box::new(NpmAdapter::with_base_url(client, &endpoints.npm)),
        Ecosystem::Php => Box::new(PackagistAdapter::with_base_url(client, &endpoints.packagist)),
    }
}
