use tabled::Tabled;

use crate::cli::TimelineArgs;
use crate::client::DashClient;
use crate::config::Config;
use crate::dashboard::{merge_timelines, TimelineRow};
use crate::error::Result;
use crate::filters::build_active_params;
use crate::output;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Created")]
    created: u64,
    #[tabled(rename = "Resolved")]
    resolved: u64,
}

impl From<&TimelineRow> for DayRow {
    fn from(row: &TimelineRow) -> Self {
        Self {
            date: row.date.clone(),
            created: row.created,
            resolved: row.resolved,
        }
    }
}

pub async fn show(client: &DashClient, config: &Config, args: TimelineArgs) -> Result<()> {
    let project_key = config.resolve_project(args.project.as_deref())?;
    let filters = args.filters.to_filter_state()?;

    let params = build_active_params(&filters, &project_key);
    let data = client.timeline(params, args.days).await?;

    let merged = merge_timelines(&data.created_timeline, &data.resolved_timeline);

    if output::is_json_output() {
        output::print_item(&merged, |_| {});
        return Ok(());
    }

    if merged.rows.is_empty() {
        output::print_message("No timeline data");
        return Ok(());
    }

    output::print_table(&merged.rows, |r| DayRow::from(r));
    println!(
        "Created: {}  Resolved: {}  Balance: {}{}",
        merged.total_created,
        merged.total_resolved,
        if merged.balance > 0 { "+" } else { "" },
        merged.balance
    );

    Ok(())
}
