//! Session options

use serde::{Deserialize, Serialize};

/// What to do when a resource short name is registered a second time with a
/// different identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later registration replaces the earlier one (logged at warn)
    #[default]
    LastWriteWins,
    /// The later registration fails with `DuplicateResource`
    Reject,
}

/// Options for a graph-building session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Duplicate resource registration handling
    pub duplicate_policy: DuplicatePolicy,

    /// Drop repeated identical triples before commit (first occurrence kept).
    /// Off by default: asserting a fact twice stores it twice.
    pub dedupe_on_commit: bool,
}

impl SessionOptions {
    /// Options with the given duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Options with commit-time de-duplication enabled or disabled
    pub fn with_dedupe_on_commit(mut self, dedupe: bool) -> Self {
        self.dedupe_on_commit = dedupe;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let opts = SessionOptions::default();
        assert_eq!(opts.duplicate_policy, DuplicatePolicy::LastWriteWins);
        assert!(!opts.dedupe_on_commit);
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: SessionOptions =
            serde_json::from_value(json!({"duplicatePolicy": "reject"})).unwrap();
        assert_eq!(opts.duplicate_policy, DuplicatePolicy::Reject);
        assert!(!opts.dedupe_on_commit);

        let opts: SessionOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(opts, SessionOptions::default());
    }
}
