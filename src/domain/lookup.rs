//! Typed outcome of a best-effort remote read

/// Result of asking a remote system for something that may not exist.
///
/// Manifest fetches and registry lookups are best-effort: the audit treats
/// `NotFound` and `Failed` the same way (the unit of work is excluded), but
/// the two are kept apart until that boundary so logs and tests can tell a
/// missing resource from a broken transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The resource exists and decoded cleanly
    Found(T),
    /// The remote side answered and does not have the resource
    NotFound,
    /// Transport failed or the payload was unusable
    Failed(String),
}

impl<T> Lookup<T> {
    /// Wrap a transport or decode failure
    pub fn failed(reason: impl Into<String>) -> Self {
        Lookup::Failed(reason.into())
    }

    /// True when the lookup produced a value
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// The found value, discarding the failure distinction
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Borrowing accessor for the found value
    pub fn as_found(&self) -> Option<&T> {
        match self {
            Lookup::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Map the found value, leaving the other variants untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Failed(reason) => Lookup::Failed(reason),
        }
    }
}
