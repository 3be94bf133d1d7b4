//! depstale - dependency staleness auditor library
//!
//! This library audits GitHub organization repositories for outdated
//! third-party dependencies across five packaging ecosystems:
//! - Python (requirements.txt / PyPI)
//! - Ruby (gemfile / RubyGems)
//! - Java (pom.xml / Maven Central)
//! - JavaScript (package.json / npm)
//! - PHP (composer.json / Packagist)

pub mod audit;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod github;
pub mod manifest;
pub mod output;
pub mod progress;
pub mod registry;
pub mod sink;
pub mod staleness;
