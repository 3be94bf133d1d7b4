//! RubyGems API adapter
//!
//! Resolves the latest published version of a gem.
//! API endpoint: https://rubygems.org/api/v1/gems/{gem}.json

use crate::domain::{Ecosystem, Lookup};
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// RubyGems API base URL
pub(crate) const RUBYGEMS_API_URL: &str = "https://rubygems.org/api/v1/gems";

/// RubyGems adapter
pub struct RubyGemsAdapter {
    client: HttpClient,
    base_url: String,
}

/// RubyGems gem metadata response; `version` is the latest release
#[derive(Debug, Deserialize)]
struct RubyGemsResponse {
    version: String,
}

impl RubyGemsAdapter {
    /// Create a new RubyGems adapter against the public endpoint
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, RUBYGEMS_API_URL)
    }

    /// Create a new RubyGems adapter against a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Build the metadata URL for a gem
    fn build_url(&self, gem: &str) -> String {
        format!("{}/{}.json", self.base_url, gem)
    }
}

#[async_trait]
impl RegistryAdapter for RubyGemsAdapter {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Ruby
    }

    fn registry_name(&self) -> &'static str {
        "RubyGems"
    }

    async fn latest_version(&self, package: &str) -> Lookup<String> {
        let url = self.build_url(package);
        let result = self
            .client
            .get_json::<RubyGemsResponse>(&url, package, self.registry_name())
            .await
            .map(|response| response.version);

        super::into_lookup(result, package, self.registry_name())
    }
}
