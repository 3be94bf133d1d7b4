//! Core domain models for depstale
//!
//! This module contains the fundamental types used throughout the crate:
//! - Ecosystem tags for the supported package registries
//! - Repository descriptors consumed by the audit
//! - Dependency declarations extracted from manifests
//! - Typed lookup outcomes for best-effort remote reads
//! - The audit result document handed to the index sink

mod audit_result;
mod dependency;
mod ecosystem;
mod lookup;
mod repository;

pub use audit_result::AuditResult;
pub use dependency::DependencyDeclaration;
pub use ecosystem::Ecosystem;
pub use lookup::Lookup;
pub use repository::Repository;
