//! Repository deduplication across contribution lists.

use std::collections::HashSet;

/// Distinct `owner/name` identifiers a user contributed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoSet(HashSet<String>);

impl RepoSet {
    /// Unions the commit, issue and pull-request repository lists.
    pub fn from_lists<S: AsRef<str>>(commit: &[S], issue: &[S], pull_request: &[S]) -> Self {
        Self(
            commit
                .iter()
                .chain(issue)
                .chain(pull_request)
                .map(|name| name.as_ref().to_string())
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

/// Number of distinct repositories across the three lists.
pub fn dedupe_repos<S: AsRef<str>>(commit: &[S], issue: &[S], pull_request: &[S]) -> usize {
    RepoSet::from_lists(commit, issue, pull_request).len()
}
