//! npm registry adapter
//!
//! Resolves the latest published version of an npm package via the
//! dist-tag alias. API endpoint: https://registry.npmjs.org/{package}/latest

use crate::domain::{Ecosystem, Lookup};
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// npm registry base URL
pub(crate) const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm registry adapter
pub struct NpmAdapter {
    client: HttpClient,
    base_url: String,
}

/// The `/latest` document; only the version field is read
#[derive(Debug, Deserialize)]
struct NpmLatestResponse {
    version: String,
}

impl NpmAdapter {
    /// Create a new npm adapter against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create a new npm adapter against a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Build the latest-version URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/latest", self.base_url, package)
    }
}

#[async_trait]
impl RegistryAdapter for NpmAdapter {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::JavaScript
    }

    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn latest_version(&self, package: &str) -> Lookup<String> {
        let url = self.build_url(package);
        let result = self
            .client
            .get_json::<NpmLatestResponse>(&url, package, self.registry_name())
            .await
            .map(|response| response.version);

        super::into_lookup(result, package, self.registry_name())
    }
}
