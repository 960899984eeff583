use serde::{Deserialize, Serialize};

/// One slice of a labeled count series.
///
/// The stats endpoint names the label after the series kind
/// (`status`, `type`, ...); the aliases fold them all into `label`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CountPoint {
    #[serde(
        alias = "status",
        alias = "type",
        alias = "priority",
        alias = "assignee",
        alias = "reporter",
        alias = "version"
    )]
    pub label: String,
    pub count: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_issues: u64,
    #[serde(default)]
    pub recent_issues: u64,
    #[serde(default)]
    pub resolved_issues: u64,
    #[serde(default)]
    pub status_distribution: Vec<CountPoint>,
    #[serde(default)]
    pub type_distribution: Vec<CountPoint>,
    /// Served by the stats endpoint but not rendered by any view; accepted
    /// so deserialization tolerates the full payload.
    #[serde(default)]
    pub priority_distribution: Vec<CountPoint>,
    #[serde(default)]
    pub assignee_distribution: Vec<CountPoint>,
    #[serde(default)]
    pub reporter_distribution: Vec<CountPoint>,
    #[serde(default)]
    pub version_distribution: Vec<CountPoint>,
    #[serde(default)]
    pub backlog_aging: Option<Vec<BacklogAgingRow>>,
}

/// Open-issue age buckets split by priority, computed upstream.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BacklogAgingRow {
    pub time_range: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub critical: u64,
    #[serde(default)]
    pub high: u64,
    #[serde(default)]
    pub medium: u64,
    #[serde(default)]
    pub low: u64,
    #[serde(default)]
    pub no_priority: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_point_label_aliases() {
        let p: CountPoint = serde_json::from_str(r#"{"status":"Done","count":4}"#).unwrap();
        assert_eq!(p.label, "Done");

        let p: CountPoint = serde_json::from_str(r#"{"version":"1.0","count":2}"#).unwrap();
        assert_eq!(p.label, "1.0");

        let p: CountPoint = serde_json::from_str(r#"{"label":"Bug","count":1}"#).unwrap();
        assert_eq!(p.label, "Bug");
    }

    #[test]
    fn test_stats_missing_series_default_empty() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"total_issues":10,"recent_issues":3,"resolved_issues":1}"#)
                .unwrap();
        assert!(stats.status_distribution.is_empty());
        assert!(stats.backlog_aging.is_none());
    }
}
