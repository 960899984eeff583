//! Filter state, sentinel resolution, and client-side issue refinement.
//!
//! The server already filters by the query params we send; the predicates
//! here exist for what it does not delegate well: free-text search and the
//! accent/space-insensitive exact version match.

use crate::normalize::normalize;
use crate::types::Issue;

/// Selector token meaning "all values" (no filter).
pub const ALL_SENTINEL: &str = "__all__";
/// Selector token meaning "explicitly no value".
pub const NO_VALUE_SENTINEL: &str = "sem-valor";

/// Map a raw UI selection to the real filter value; sentinels become `""`.
pub fn resolve_filter_value(raw: &str) -> &str {
    if raw == ALL_SENTINEL || raw == NO_VALUE_SENTINEL {
        ""
    } else {
        raw
    }
}

pub fn is_filter_active(raw: &str) -> bool {
    !resolve_filter_value(raw).is_empty()
}

/// Active filters, keyed the way the API expects. `""` means unset.
///
/// Sentinels never enter this struct: every write goes through
/// [`FilterState::set`], which resolves them first.
#[derive(Debug, Default, Clone)]
pub struct FilterState {
    pub status: String,
    pub assignee_email: String,
    pub reporter_email: String,
    pub fix_version: String,
    pub issue_type: String,
    pub priority: String,
    pub created_after: String,
    pub created_before: String,
}

impl FilterState {
    /// Store a selection under `key`, resolving sentinel tokens to unset.
    /// Unknown keys are ignored.
    pub fn set(&mut self, key: &str, raw: &str) {
        let value = resolve_filter_value(raw).to_string();
        match key {
            "status" => self.status = value,
            "assignee_email" => self.assignee_email = value,
            "reporter_email" => self.reporter_email = value,
            "fix_version" => self.fix_version = value,
            "issue_type" => self.issue_type = value,
            "priority" => self.priority = value,
            "created_after" => self.created_after = value,
            "created_before" => self.created_before = value,
            _ => {}
        }
    }

    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("status", &self.status),
            ("assignee_email", &self.assignee_email),
            ("reporter_email", &self.reporter_email),
            ("fix_version", &self.fix_version),
            ("issue_type", &self.issue_type),
            ("priority", &self.priority),
            ("created_after", &self.created_after),
            ("created_before", &self.created_before),
        ]
    }
}

/// True when any filter would contribute to the outgoing params.
pub fn has_active_filters(filters: &FilterState) -> bool {
    filters.entries().iter().any(|(_, value)| is_filter_active(value))
}

/// Build the outgoing query params: the project key plus every filter whose
/// resolved value is non-empty, in declaration order.
pub fn build_active_params(filters: &FilterState, project_key: &str) -> Vec<(String, String)> {
    let mut params = vec![("project_key".to_string(), project_key.to_string())];
    for (key, value) in filters.entries() {
        if is_filter_active(value) {
            params.push((key.to_string(), resolve_filter_value(value).to_string()));
        }
    }
    params
}

/// Re-filter a fetched page of issues by search term and exact version.
///
/// Both predicates are conjunctive; each is skipped when its input is empty
/// (or a sentinel, for the version). Order is preserved and the input is
/// untouched.
pub fn filter_issues(issues: &[Issue], search_term: &str, version_filter: &str) -> Vec<Issue> {
    let term = search_term.to_lowercase();
    let version = normalize(resolve_filter_value(version_filter));

    issues
        .iter()
        .filter(|issue| term.is_empty() || matches_search(issue, &term))
        .filter(|issue| version.is_empty() || matches_version(issue, &version))
        .cloned()
        .collect()
}

/// Case-insensitive substring over key, summary, status, type, and the
/// comma-joined versions.
fn matches_search(issue: &Issue, term: &str) -> bool {
    issue.jira_key.to_lowercase().contains(term)
        || issue.summary.to_lowercase().contains(term)
        || issue.status.to_lowercase().contains(term)
        || issue.issue_type.to_lowercase().contains(term)
        || issue.versions_joined().to_lowercase().contains(term)
}

/// Exact post-normalization equality against any of the issue's versions.
/// An issue with no versions never matches an active filter.
fn matches_version(issue: &Issue, normalized_filter: &str) -> bool {
    issue
        .fix_versions
        .iter()
        .any(|v| normalize(v) == normalized_filter)
}
