use colored::Colorize;

use crate::cli::DashboardArgs;
use crate::client::DashClient;
use crate::config::Config;
use crate::dashboard::{build_view, group_distribution, DashboardView, DEFAULT_MAX_SLICES};
use crate::error::Result;
use crate::filters::{build_active_params, has_active_filters, FilterState};
use crate::output;
use crate::types::{CountPoint, DashboardStats};

pub async fn show(client: &DashClient, config: &Config, args: DashboardArgs) -> Result<()> {
    let project_key = config.resolve_project(args.project.as_deref())?;
    let filters = args.filters.to_filter_state()?;
    let search = args.search.as_deref().unwrap_or("");

    let params = build_active_params(&filters, &project_key);

    // Independent data slices; each degrades to "no data" on its own.
    let page = client.issues(params.clone(), 1, false).await?;
    let stats = client.dashboard_stats(&params).await.ok();
    let timeline = client.timeline(params.clone(), args.days).await.ok();

    // Project-wide total, fetched without filters, shown next to the
    // filtered one.
    let project_total = if has_active_filters(&filters) {
        let base = build_active_params(&FilterState::default(), &project_key);
        client
            .dashboard_stats(&base)
            .await
            .ok()
            .map(|s| s.total_issues)
    } else {
        None
    };

    let view = build_view(
        &page.issues,
        stats.as_ref(),
        timeline.as_ref(),
        search,
        &filters,
    );

    if output::is_json_output() {
        output::print_item(&view, |_| {});
        return Ok(());
    }

    println!("{}", format!("Dashboard — {project_key}").bold());
    println!();

    match stats.as_ref() {
        Some(stats) => render_stats(stats, &view, project_total),
        None => println!("Statistics not available yet."),
    }

    render_timeline_summary(&view, args.days);
    render_recent_issues(&view, &filters);

    Ok(())
}

fn render_stats(stats: &DashboardStats, view: &DashboardView, project_total: Option<u64>) {
    match project_total {
        Some(total) => {
            println!("Total (filtered):    {}", stats.total_issues);
            println!("Project total:       {total}");
        }
        None => println!("Total issues:        {}", stats.total_issues),
    }
    println!("Created (30 days):   {}", stats.recent_issues);
    println!("Resolved (30 days):  {}", stats.resolved_issues);
    if let Some(rate) = view.resolution_rate {
        println!("Resolution rate:     {rate}%");
    }
    println!();

    if let Some(chart) = view.status_chart.as_deref() {
        if !chart.is_empty() {
            println!("{}", "Status distribution".bold());
            render_bars(chart);
            println!();
        }
    }

    let type_chart = capped_chart(&stats.type_distribution);
    if !type_chart.is_empty() {
        println!("{}", "Type distribution".bold());
        render_bars(&type_chart);
        println!();
    }

    render_top("Top assignees", &stats.assignee_distribution);
    render_top("Top reporters", &stats.reporter_distribution);
    render_top("Top releases", &stats.version_distribution);

    if let Some(aging) = stats.backlog_aging.as_deref() {
        if aging.iter().any(|row| row.total > 0) {
            println!("{}", "Backlog aging".bold());
            for row in aging {
                println!(
                    "  {:<16} {:>4}  (C:{} H:{} M:{} L:{} -:{})",
                    row.time_range,
                    row.total,
                    row.critical,
                    row.high,
                    row.medium,
                    row.low,
                    row.no_priority
                );
            }
            println!();
        }
    }
}

/// Secondary series get the same slice cap as the status chart.
fn capped_chart(points: &[CountPoint]) -> Vec<CountPoint> {
    group_distribution(points, DEFAULT_MAX_SLICES)
}

fn render_bars(points: &[CountPoint]) {
    let max = points.iter().map(|p| p.count).max().unwrap_or(0);
    let label_width = points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);

    for point in points {
        println!(
            "  {:<width$} {:>5} {}",
            point.label,
            point.count,
            output::bar(point.count, max, 30).cyan(),
            width = label_width
        );
    }
}

fn render_top(title: &str, points: &[CountPoint]) {
    if points.is_empty() {
        return;
    }

    let mut top = points.to_vec();
    top.sort_by(|a, b| b.count.cmp(&a.count));
    top.truncate(5);

    println!("{}", title.bold());
    for point in &top {
        println!("  {:<30} {}", output::truncate(&point.label, 30), point.count);
    }
    println!();
}

fn render_timeline_summary(view: &DashboardView, days: u32) {
    let Some(timeline) = view.timeline.as_ref() else {
        println!("Timeline not available yet.");
        println!();
        return;
    };

    println!("{}", format!("Timeline ({days} days)").bold());
    println!(
        "  Created: {}  Resolved: {}  Balance: {}",
        timeline.total_created,
        timeline.total_resolved,
        format_balance(timeline.balance)
    );
    println!();
}

fn format_balance(balance: i64) -> String {
    if balance > 0 {
        format!("+{balance}").red().to_string()
    } else if balance < 0 {
        balance.to_string().green().to_string()
    } else {
        balance.to_string()
    }
}

fn render_recent_issues(view: &DashboardView, filters: &FilterState) {
    if view.visible_issues.is_empty() {
        return;
    }

    // Newest first, capped at five, like the dashboard's recent-tickets card.
    let mut recent: Vec<_> = view.visible_issues.iter().collect();
    recent.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    recent.truncate(5);

    let title = if filters.fix_version.is_empty() {
        "Most recent issues".to_string()
    } else {
        format!("Most recent issues ({})", filters.fix_version)
    };
    println!("{}", title.bold());
    for issue in recent {
        println!(
            "  {:<12} {:<50} {}",
            issue.jira_key,
            output::truncate(&issue.summary, 50),
            output::status_colored(&issue.status)
        );
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

    #[test]
    fn test_type_chart_short_series_unchanged() {
        let input = points(&[("Bug", 4), ("Task", 2)]);
        assert_eq!(capped_chart(&input), input);
    }

    #[test]
    fn test_type_chart_collapses_long_tail() {
        let input = points(&[
            ("Bug", 50),
            ("Task", 40),
            ("Story", 30),
            ("Epic", 20),
            ("Sub-task", 10),
            ("Incident", 5),
            ("Spike", 3),
            ("Chore", 2),
        ]);
        let chart = capped_chart(&input);

        assert_eq!(chart.len(), 7);
        assert_eq!(chart[6].label, "Outros");
        assert_eq!(chart[6].count, 5);
    }
}
