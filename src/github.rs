//! Repository content retrieval
//!
//! Fetches a single manifest file from a repository at a branch ref via the
//! contents API and decodes the embedded base64 payload according to the
//! file kind. Retrieval is best-effort: every outcome is a [`Lookup`], the
//! audit never aborts because a manifest could not be read.

use crate::config::GithubConfig;
use crate::domain::Lookup;
use crate::error::ConfigError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Decoded manifest content, tagged by file kind.
///
/// XML stays as text here; the Maven parser walks it with its own reader.
#[derive(Debug, Clone, PartialEq)]
pub enum RawManifest {
    /// UTF-8 plain text (requirements.txt, gemfile, packages.config)
    Text(String),
    /// XML document text (pom.xml)
    Xml(String),
    /// Parsed JSON object (package.json, composer.json)
    Json(serde_json::Value),
}

/// File kinds the contents endpoint decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Text,
    Xml,
    Json,
}

/// Contents API response; only the base64 payload is read
#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: Option<String>,
}

/// Client for the repository contents API
#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    api_url: String,
    org: String,
}

impl ContentClient {
    /// Build a content client from configuration.
    ///
    /// Fails only on unusable configuration (a token that cannot be sent as
    /// a header, or an HTTP client that cannot be constructed).
    pub fn new(config: &GithubConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("token {}", token))
                .map_err(|e| ConfigError::invalid_token(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::http_client(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            org: config.org.clone(),
        })
    }

    /// The organization this client reads from
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Fetch one file from a repository at a branch ref.
    ///
    /// `NotFound` covers a 404, a response without a payload (directories,
    /// oversized files), and filenames outside the decode table; `Failed`
    /// covers transport errors and undecodable payloads.
    pub async fn fetch(&self, repo: &str, branch: &str, path: &str) -> Lookup<RawManifest> {
        let Some(kind) = Self::kind_for(path) else {
            debug!(repo, path, "no decode rule for filename");
            return Lookup::NotFound;
        };

        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_url, self.org, repo, path, branch
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(repo, path, error = %e, "content request failed");
                return Lookup::failed(e.to_string());
            }
        };

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(repo, branch, path, "file not present");
            return Lookup::NotFound;
        }

        if !response.status().is_success() {
            let status = response.status();
            warn!(repo, path, %status, "content request rejected");
            return Lookup::failed(format!("HTTP {}", status));
        }

        let body: ContentResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(repo, path, error = %e, "content response undecodable");
                return Lookup::failed(format!("invalid content response: {}", e));
            }
        };

        let Some(encoded) = body.content.filter(|c| !c.trim().is_empty()) else {
            debug!(repo, path, "response carried no content payload");
            return Lookup::NotFound;
        };

        match Self::decode_payload(&encoded, kind) {
            Ok(manifest) => Lookup::Found(manifest),
            Err(reason) => {
                warn!(repo, path, reason, "content payload undecodable");
                Lookup::failed(reason)
            }
        }
    }

    /// Decode rule for a filename, by suffix
    fn kind_for(path: &str) -> Option<FileKind> {
        if path.ends_with(".json") {
            Some(FileKind::Json)
        } else if path.ends_with(".xml") {
            Some(FileKind::Xml)
        } else if path.ends_with(".txt") || path.ends_with("gemfile") || path == "packages.config" {
            Some(FileKind::Text)
        } else {
            None
        }
    }

    /// Decode a base64 payload into manifest content.
    ///
    /// The contents API wraps payloads with embedded newlines; whitespace is
    /// stripped before decoding.
    fn decode_payload(encoded: &str, kind: FileKind) -> Result<RawManifest, String> {
        let compact: String = encoded.split_whitespace().collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| format!("invalid base64 payload: {}", e))?;
        let text =
            String::from_utf8(bytes).map_err(|e| format!("payload is not UTF-8: {}", e))?;

        match kind {
            FileKind::Text => Ok(RawManifest::Text(text)),
            FileKind::Xml => Ok(RawManifest::Xml(text)),
            FileKind::Json => serde_json::from_str(&text)
                .map(RawManifest::Json)
                .map_err(|e| format!("payload is not valid JSON: {}", e)),
        }
    }
}
