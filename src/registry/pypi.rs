//! PyPI JSON API adapter
//!
//! Resolves the latest published version of a Python package.
//! API endpoint: https://pypi.org/pypi/{package}/json

use crate::domain::{Ecosystem, Lookup};
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// PyPI JSON API base URL
pub(crate) const PYPI_API_URL: &str = "https://pypi.org/pypi";

/// PyPI adapter
pub struct PyPIAdapter {
    client: HttpClient,
    base_url: String,
}

/// PyPI package metadata response
#[derive(Debug, Deserialize)]
struct PyPIPackageResponse {
    info: PyPIPackageInfo,
}

/// The `info` block; only the latest version field is read
#[derive(Debug, Deserialize)]
struct PyPIPackageInfo {
    version: String,
}

impl PyPIAdapter {
    /// Create a new PyPI adapter against the public endpoint
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_API_URL)
    }

    /// Create a new PyPI adapter against a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Build the metadata URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}/json", self.base_url, package)
    }
}

#[async_trait]
impl RegistryAdapter for PyPIAdapter {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Python
    }

    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn latest_version(&self, package: &str) -> Lookup<String> {
        let url = self.build_url(package);
        let result = self
            .client
            .get_json::<PyPIPackageResponse>(&url, package, self.registry_name())
            .await
            .map(|response| response.info.version);

        super::into_lookup(result, package, self.registry_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pypi_adapter_ecosystem() {
        let client = HttpClient::new().unwrap();
        let adapter = PyPIAdapter::new(client);
        assert_eq!(adapter.ecosystem(), Ecosystem::Python);
        assert_eq!(adapter.registry_name(), "PyPI");
    }

    #[test]
    fn test_build_url() {
        let client = HttpClient::new().unwrap();
        let adapter = PyPIAdapter::new(client);
        assert_eq!(
            adapter.build_url("requests"),
            "https://pypi.org/pypi/requests/json"
        );
    }

    #[test]
    fn test_build_url_custom_base() {
        let client = HttpClient::new().unwrap();
        let adapter = PyPIAdapter::with_base_url(client, "http://127.0.0.1:9999/pypi");
        assert_eq!(
            adapter.build_url("flask"),
            "http://127.0.0.1:9999/pypi/flask/json"
        );
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"
        {
            "info": {
                "name": "requests",
                "version": "2.31.0",
                "summary": "Python HTTP for Humans."
            }
        }
        "#;

        let response: PyPIPackageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.info.version, "2.31.0");
    }
}
