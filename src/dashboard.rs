//! Chart-shaping aggregations and the view facade.
//!
//! Everything here is a pure transformation over already-fetched data; the
//! client module owns all network concerns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::filters::{filter_issues, FilterState};
use crate::types::{CountPoint, DashboardStats, DatedCountPoint, Issue, TimelineData};

/// Default slice cap for categorical charts.
pub const DEFAULT_MAX_SLICES: usize = 6;

/// Label of the synthetic overflow bucket.
pub const OVERFLOW_LABEL: &str = "Outros";

/// Cap a labeled count series at `max_items` slices for charting.
///
/// Short series pass through untouched. Longer ones keep the `max_items`
/// largest counts (stable on ties) and collapse the rest into one
/// [`OVERFLOW_LABEL`] bucket; the count total is conserved.
pub fn group_distribution(points: &[CountPoint], max_items: usize) -> Vec<CountPoint> {
    if points.len() <= max_items {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    let rest_count: u64 = sorted[max_items..].iter().map(|p| p.count).sum();
    sorted.truncate(max_items);
    sorted.push(CountPoint {
        label: OVERFLOW_LABEL.to_string(),
        count: rest_count,
    });
    sorted
}

/// One date of the merged created-vs-resolved series.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub date: String,
    pub created: u64,
    pub resolved: u64,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct MergedTimeline {
    pub rows: Vec<TimelineRow>,
    pub total_created: u64,
    pub total_resolved: u64,
    /// Created minus resolved; positive means the backlog grew.
    pub balance: i64,
}

/// Outer-join two sparse date-keyed series into one dense sorted series.
///
/// Every date present in either input gets a row, zero-filled on the side
/// that lacks it. ISO dates sort chronologically; anything else is treated
/// as an opaque sort key.
pub fn merge_timelines(created: &[DatedCountPoint], resolved: &[DatedCountPoint]) -> MergedTimeline {
    let mut by_date: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for point in created {
        by_date.entry(&point.date).or_default().0 += point.count;
    }
    for point in resolved {
        by_date.entry(&point.date).or_default().1 += point.count;
    }

    let rows: Vec<TimelineRow> = by_date
        .into_iter()
        .map(|(date, (created, resolved))| TimelineRow {
            date: date.to_string(),
            created,
            resolved,
        })
        .collect();

    let total_created: u64 = rows.iter().map(|r| r.created).sum();
    let total_resolved: u64 = rows.iter().map(|r| r.resolved).sum();

    MergedTimeline {
        rows,
        total_created,
        total_resolved,
        balance: total_created as i64 - total_resolved as i64,
    }
}

/// Share of recent issues that were resolved, as a whole percentage.
/// Defined as 0 when nothing recent exists.
pub fn resolution_rate(resolved: u64, recent: u64) -> u32 {
    if recent == 0 {
        return 0;
    }
    ((resolved as f64 / recent as f64) * 100.0).round() as u32
}

/// View-ready structures derived from one fetched snapshot.
///
/// `None` fields mean the corresponding slice has not arrived yet, which
/// consumers must render as "no data", not as zero.
#[derive(Serialize, Debug, Clone)]
pub struct DashboardView {
    pub visible_issues: Vec<Issue>,
    pub status_chart: Option<Vec<CountPoint>>,
    pub resolution_rate: Option<u32>,
    pub timeline: Option<MergedTimeline>,
}

pub fn build_view(
    issues: &[Issue],
    stats: Option<&DashboardStats>,
    timeline: Option<&TimelineData>,
    search_term: &str,
    filters: &FilterState,
) -> DashboardView {
    DashboardView {
        visible_issues: filter_issues(issues, search_term, &filters.fix_version),
        status_chart: stats
            .map(|s| group_distribution(&s.status_distribution, DEFAULT_MAX_SLICES)),
        resolution_rate: stats.map(|s| resolution_rate(s.resolved_issues, s.recent_issues)),
        timeline: timeline.map(|t| merge_timelines(&t.created_timeline, &t.resolved_timeline)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(counts: &[(&str, u64)]) -> Vec<CountPoint> {
        counts
            .iter()
            .map(|(label, count)| CountPoint {
                label: label.to_string(),
                count: *count,
            })
            .collect()
    }

    fn dated(series: &[(&str, u64)]) -> Vec<DatedCountPoint> {
        series
            .iter()
            .map(|(date, count)| DatedCountPoint {
                date: date.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_group_short_series_unchanged() {
        let input = points(&[("To Do", 3), ("Done", 1)]);
        assert_eq!(group_distribution(&input, 6), input);
    }

    #[test]
    fn test_group_exact_limit_unchanged() {
        let input = points(&[("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(group_distribution(&input, 3), input);
    }

    #[test]
    fn test_group_collapses_tail_into_outros() {
        let input = points(&[
            ("a", 50),
            ("b", 40),
            ("c", 30),
            ("d", 20),
            ("e", 10),
            ("f", 5),
            ("g", 3),
            ("h", 2),
        ]);
        let grouped = group_distribution(&input, 6);

        assert_eq!(grouped.len(), 7);
        assert_eq!(grouped[6].label, "Outros");
        assert_eq!(grouped[6].count, 5);

        let total_in: u64 = input.iter().map(|p| p.count).sum();
        let total_out: u64 = grouped.iter().map(|p| p.count).sum();
        assert_eq!(total_in, total_out);
    }

    #[test]
    fn test_group_ties_keep_original_order() {
        let input = points(&[("a", 1), ("b", 5), ("c", 5), ("d", 5)]);
        let grouped = group_distribution(&input, 2);
        assert_eq!(grouped[0].label, "b");
        assert_eq!(grouped[1].label, "c");
        assert_eq!(grouped[2].label, "Outros");
        assert_eq!(grouped[2].count, 6);
    }

    #[test]
    fn test_merge_is_outer_join_zero_filled() {
        let merged = merge_timelines(
            &dated(&[("2024-01-01", 3)]),
            &dated(&[("2024-01-02", 5)]),
        );

        assert_eq!(
            merged.rows,
            vec![
                TimelineRow {
                    date: "2024-01-01".to_string(),
                    created: 3,
                    resolved: 0,
                },
                TimelineRow {
                    date: "2024-01-02".to_string(),
                    created: 0,
                    resolved: 5,
                },
            ]
        );
        assert_eq!(merged.total_created, 3);
        assert_eq!(merged.total_resolved, 5);
        assert_eq!(merged.balance, -2);
    }

    #[test]
    fn test_merge_sorts_ascending_and_dedupes_dates() {
        let merged = merge_timelines(
            &dated(&[("2024-02-01", 1), ("2024-01-15", 2)]),
            &dated(&[("2024-01-15", 4)]),
        );

        let dates: Vec<&str> = merged.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-02-01"]);
        assert_eq!(merged.rows[0].created, 2);
        assert_eq!(merged.rows[0].resolved, 4);
    }

    #[test]
    fn test_merge_empty_inputs() {
        let merged = merge_timelines(&[], &[]);
        assert!(merged.rows.is_empty());
        assert_eq!(merged.balance, 0);
    }

    #[test]
    fn test_resolution_rate() {
        assert_eq!(resolution_rate(4, 10), 40);
        assert_eq!(resolution_rate(0, 0), 0);
        assert_eq!(resolution_rate(5, 0), 0);
        assert_eq!(resolution_rate(1, 3), 33);
        assert_eq!(resolution_rate(2, 3), 67);
    }

    #[test]
    fn test_build_view_without_stats_is_no_data() {
        let view = build_view(&[], None, None, "", &FilterState::default());
        assert!(view.status_chart.is_none());
        assert!(view.resolution_rate.is_none());
        assert!(view.timeline.is_none());
        assert!(view.visible_issues.is_empty());
    }

    #[test]
    fn test_build_view_applies_version_filter() {
        let issues: Vec<Issue> = serde_json::from_value(serde_json::json!([
            {"id": "1", "jira_key": "A-1", "summary": "x", "fix_versions": ["1.0"]},
            {"id": "2", "jira_key": "A-2", "summary": "y", "fix_versions": ["2.0"]},
        ]))
        .unwrap();

        let mut filters = FilterState::default();
        filters.set("fix_version", "1.0");

        let view = build_view(&issues, None, None, "", &filters);
        assert_eq!(view.visible_issues.len(), 1);
        assert_eq!(view.visible_issues[0].jira_key, "A-1");
    }
}
