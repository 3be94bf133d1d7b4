//! Maven Central search adapter
//!
//! Resolves the latest published version of a Java artifact.
//! API endpoint: https://search.maven.org/solrsearch/select
//!
//! Query format: q=g:%22{groupId}%22+AND+a:%22{artifactId}%22&rows=1&wt=json

use crate::domain::{Ecosystem, Lookup};
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryAdapter};
use async_trait::async_trait;
use serde::Deserialize;

/// Maven Central search endpoint
pub(crate) const MAVEN_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";

/// Maven Central adapter
pub struct MavenCentralAdapter {
    client: HttpClient,
    base_url: String,
}

/// Maven Central search response
#[derive(Debug, Deserialize)]
struct MavenSearchResponse {
    response: MavenResponseBody,
}

/// Maven Central response body
#[derive(Debug, Deserialize)]
struct MavenResponseBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<MavenArtifactDoc>,
}

/// One artifact hit; only the latest version field is read
#[derive(Debug, Deserialize)]
struct MavenArtifactDoc {
    #[serde(rename = "latestVersion")]
    latest_version: String,
}

impl MavenCentralAdapter {
    /// Create a new Maven Central adapter against the public endpoint
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, MAVEN_SEARCH_URL)
    }

    /// Create a new Maven Central adapter against a custom base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Build the search URL for a `groupId:artifactId` coordinate.
    ///
    /// The quoted (`%22`) terms match the artifact exactly; the query string
    /// is otherwise sent as-is.
    fn build_url(&self, package: &str) -> Result<String, RegistryError> {
        let Some((group, artifact)) = package.split_once(':') else {
            return Err(RegistryError::invalid_coordinate(
                package,
                self.registry_name(),
            ));
        };

        if group.is_empty() || artifact.is_empty() || artifact.contains(':') {
            return Err(RegistryError::invalid_coordinate(
                package,
                self.registry_name(),
            ));
        }

        Ok(format!(
            "{}?q=g:%22{}%22+AND+a:%22{}%22&rows=1&wt=json",
            self.base_url, group, artifact
        ))
    }
}

#[async_trait]
impl RegistryAdapter for MavenCentralAdapter {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Java
    }

    fn registry_name(&self) -> &'static str {
        "Maven Central"
    }

    async fn latest_version(&self, package: &str) -> Lookup<String> {
        let result = match self.build_url(package) {
            Ok(url) => self
                .client
                .get_json::<MavenSearchResponse>(&url, package, self.registry_name())
                .await
                .and_then(|response| {
                    // Zero hits means the coordinate is unknown to the index
                    if response.response.num_found == 0 {
                        return Err(RegistryError::package_not_found(
                            package,
                            self.registry_name(),
                        ));
                    }
                    response
                        .response
                        .docs
                        .into_iter()
                        .next()
                        .map(|doc| doc.latest_version)
                        .ok_or_else(|| {
                            RegistryError::invalid_response(
                                package,
                                self.registry_name(),
                                "numFound > 0 but docs is empty",
                            )
                        })
                }),
            Err(e) => Err(e),
        };

        super::into_lookup(result, package, self.registry_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maven_adapter_ecosystem() {
        let client = HttpClient::new().unwrap();
        let adapter = MavenCentralAdapter::new(client);
        assert_eq!(adapter.ecosystem(), Ecosystem::Java);
        assert_eq!(adapter.registry_name(), "Maven Central");
    }

    #[test]
    fn test_build_url() {
        let client = HttpClient::new().unwrap();
        let adapter = MavenCentralAdapter::new(client);
        let url = adapter.build_url("org.slf4j:slf4j-api").unwrap();
        assert_eq!(
            url,
            "https://search.maven.org/solrsearch/select?q=g:%22org.slf4j%22+AND+a:%22slf4j-api%22&rows=1&wt=json"
        );
    }

    #[test]
    fn test_build_url_invalid_coordinate() {
        let client = HttpClient::new().unwrap();
        let adapter = MavenCentralAdapter::new(client);

        assert!(adapter.build_url("slf4j-api").is_err());
        assert!(adapter.build_url("a:b:c").is_err());
        assert!(adapter.build_url(":artifact").is_err());
        assert!(adapter.build_url("group:").is_err());
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"
        {
            "responseHeader": {"status": 0},
            "response": {
                "numFound": 1,
                "start": 0,
                "docs": [
                    {"id": "org.slf4j:slf4j-api", "latestVersion": "2.0.9", "timestamp": 1693526400000}
                ]
            }
        }
        "#;

        let response: MavenSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response.num_found, 1);
        assert_eq!(response.response.docs[0].latest_version, "2.0.9");
    }

    #[test]
    fn test_deserialize_empty_response() {
        let json = r#"{"response": {"numFound": 0, "docs": []}}"#;
        let response: MavenSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response.num_found, 0);
        assert!(response.response.docs.is_empty());
    }
}
