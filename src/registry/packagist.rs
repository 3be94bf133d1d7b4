//! Packagist metadata adapter
//!
//! Resolves the latest published version of a Composer package.
//! API endpoint: https://repo.packagist.org/p2/{vendor}/{package}.json
//!
//! The p2 metadata keys the version list by the full package name; the
//! first entry is the most recent release.

use crate::domain::{Ecosystem, Lookup};
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// Packagist p2 metadata base URL
pub(crate) const PACKAGIST_API_URL: &str = "https://repo.packagist.org/p2";

/// Packagist adapter
pub struct PackagistAdapter {
    client: HttpClient,
    base_url: String,
}

/// Packagist p2 metadata response
#[derive(Debug, Deserialize)]
struct PackagistResponse {
    packages: HashMap<String, Vec<PackagistVersion>>,
}

/// One release entry; only the version field is read
#[derive(Debug, Deserialize)]
struct PackagistVersion {
    version: String,
}

impl PackagistAdapter {
    /// Create a new Packagist adapter against the public endpoint
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PACKAGIST_API_URL)
    }

    /// Create a new Packagist adapter against a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Build the metadata URL for a `vendor/package` name
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}.json", self.base_url, package)
    }
}

#[async_trait]
impl RegistryAdapter for PackagistAdapter {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Php
    }

    fn registry_name(&self) -> &'static str {
        "Packagist"
    }

    async fn latest_version(&self, package: &str) -> Lookup<String> {
        let url = self.build_url(package);
        let result = self
            .client
            .get_json::<PackagistResponse>(&url, package, self.registry_name())
            .await
            .and_then(|mut response| {
                response
                    .packages
                    .remove(package)
                    .and_then(|versions| versions.into_iter().next())
                    .map(|entry| entry.version)
                    .ok_or_else(|| {
                        RegistryError::invalid_response(
                            package,
                            self.registry_name(),
                            "package key missing or empty version list",
                        )
                    })
            });

        super::into_lookup(result, package, self.registry_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packagist_adapter_ecosystem() {
        let client = HttpClient::new().unwrap();
        let adapter = PackagistAdapter::new(client);
        assert_eq!(adapter.ecosystem(), Ecosystem::Php);
        assert_eq!(adapter.registry_name(), "Packagist");
    }

    #[test]
    fn test_build_url() {
        let client = HttpClient::new().unwrap();
        let adapter = PackagistAdapter::new(client);
        assert_eq!(
            adapter.build_url("symfony/console"),
            "https://repo.packagist.org/p2/symfony/console.json"
        );
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"
        {
            "packages": {
                "symfony/console": [
                    {"version": "v6.4.1", "version_normalized": "6.4.1.0"},
                    {"version": "v6.4.0", "version_normalized": "6.4.0.0"}
                ]
            }
        }
        "#;

        let response: PackagistResponse = serde_json::from_str(json).unwrap();
        let versions = &response.packages["symfony/console"];
        assert_eq!(versions[0].version, "v6.4.1");
    }
}
