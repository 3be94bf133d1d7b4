//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with CLI configuration and repository input
//! - RegistryError: Issues with registry and content-API communication
//! - SinkError: Issues writing audit documents to a sink
//!
//! Nothing in the audit path itself raises these across the batch: remote
//! failures degrade to [`crate::domain::Lookup`] variants. The typed errors
//! below classify transport outcomes beneath that boundary and report the
//! genuinely fatal conditions (bad input, unusable configuration, sink I/O).

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry and content-API related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Sink related errors
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Errors related to configuration and repository input
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Repository input file could not be read
    #[error("failed to read repository file {path}: {source}")]
    ReposFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Repository input file is not valid descriptor JSON
    #[error("failed to parse repository file {path}: {message}")]
    ReposFileParse { path: PathBuf, message: String },

    /// No repositories were supplied
    #[error("no repositories to audit: pass a repository file or --repo")]
    NoRepositories,

    /// Single-repository flags are incomplete
    #[error("incomplete repository flags: {message}")]
    IncompleteRepoFlags { message: String },

    /// API token cannot be used as a header value
    #[error("invalid API token: {message}")]
    InvalidToken { message: String },

    /// HTTP client construction failed
    #[error("failed to create HTTP client: {message}")]
    HttpClient { message: String },
}

/// Errors related to registry and content-API communication.
///
/// These never cross the audit boundary; adapters collapse them into
/// `Lookup::NotFound` / `Lookup::Failed` after logging.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry}")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Response body missing fields or undecodable
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Request exceeded the configured timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// Maven coordinate without a group:artifact separator
    #[error("invalid coordinate '{name}' for {registry}: expected groupId:artifactId")]
    InvalidCoordinate { name: String, registry: String },
}

/// Errors related to sink writes
#[derive(Error, Debug)]
pub enum SinkError {
    /// Document could not be serialized
    #[error("failed to encode audit document: {message}")]
    Encode { message: String },

    /// Write to the sink target failed
    #[error("failed to write to sink: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates a new ReposFileRead error
    pub fn repos_file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReposFileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ReposFileParse error
    pub fn repos_file_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::ReposFileParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidToken error
    pub fn invalid_token(message: impl Into<String>) -> Self {
        ConfigError::InvalidToken {
            message: message.into(),
        }
    }

    /// Creates a new HttpClient error
    pub fn http_client(message: impl Into<String>) -> Self {
        ConfigError::HttpClient {
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidCoordinate error
    pub fn invalid_coordinate(name: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::InvalidCoordinate {
            name: name.into(),
            registry: registry.into(),
        }
    }
}

impl SinkError {
    /// Creates a new Encode error
    pub fn encode(message: impl Into<String>) -> Self {
        SinkError::Encode {
            message: message.into(),
        }
    }
}
