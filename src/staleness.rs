//! Per-ecosystem staleness rules
//!
//! Handles:
//! - exact string comparison for Python and Java declarations
//! - range-marker stripping (`^`/`~`) before comparison for JavaScript and PHP
//! - pessimistic-constraint range math for Ruby (`~> X.Y` allows up to, but
//!   not including, the next minor release)
//!
//! A dependency whose latest version is unknown is never judged; the caller
//! gets `None` and leaves it out of the stale count.

use semver::Version;

use crate::domain::{DependencyDeclaration, Ecosystem, Lookup};

/// Outcome of judging one declaration against the registry's latest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StalenessVerdict {
    pub name: String,
    pub stale: bool,
}

/// Judge a declaration against a registry lookup.
///
/// Short-circuits to `None` when the latest version is not known, so a
/// failed or not-found lookup can never contribute to the stale count.
pub fn judge(
    declaration: &DependencyDeclaration,
    latest: &Lookup<String>,
) -> Option<StalenessVerdict> {
    let latest = latest.as_found()?;
    Some(StalenessVerdict {
        name: declaration.name.clone(),
        stale: is_stale(declaration.ecosystem, &declaration.requirement, latest),
    })
}

/// Decide whether a declared version is stale relative to the latest
/// published one.
pub fn is_stale(ecosystem: Ecosystem, declared: &str, latest: &str) -> bool {
    match ecosystem {
        Ecosystem::Python | Ecosystem::Java => declared != latest,
        Ecosystem::JavaScript | Ecosystem::Php => {
            declared.trim_matches(|c| c == '^' || c == '~') != latest
        }
        Ecosystem::Ruby => !pessimistic_allows(declared, latest),
    }
}

/// Whether `latest` satisfies the pessimistic constraint `~> declared`.
///
/// The allowed range is `[declared, next-minor)`. Versions are read as up to
/// three numeric dot segments with missing segments as zero; if either side
/// does not parse, the constraint is treated as satisfied and the dependency
/// reported as current rather than stale.
fn pessimistic_allows(declared: &str, latest: &str) -> bool {
    let (Some(base), Some(latest)) = (parse_release(declared), parse_release(latest)) else {
        return true;
    };
    let ceiling = Version::new(base.major, base.minor + 1, 0);
    base <= latest && latest < ceiling
}

fn parse_release(value: &str) -> Option<Version> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let mut fields = [0u64; 3];
    for (index, segment) in value.split('.').enumerate() {
        if index >= 3 {
            return None;
        }
        fields[index] = segment.parse().ok()?;
    }
    Some(Version::new(fields[0], fields[1], fields[2]))
}
