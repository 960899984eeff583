use tabled::Tabled;

use crate::cli::IssueListArgs;
use crate::client::DashClient;
use crate::config::Config;
use crate::error::Result;
use crate::filters::{build_active_params, filter_issues};
use crate::output;
use crate::types::Issue;

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Type")]
    issue_type: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Issue> for IssueRow {
    fn from(issue: &Issue) -> Self {
        Self {
            key: issue.jira_key.clone(),
            summary: output::truncate(&issue.summary, 50),
            status: output::status_colored(&issue.status),
            issue_type: issue.issue_type.clone(),
            priority: issue
                .priority
                .as_deref()
                .map(output::priority_colored)
                .unwrap_or_default(),
            version: issue.versions_joined(),
            assignee: issue.assignee_name.clone().unwrap_or_default(),
            created: issue
                .created_date
                .as_deref()
                .map(output::format_date_only)
                .unwrap_or_default(),
        }
    }
}

pub async fn list(client: &DashClient, config: &Config, args: IssueListArgs) -> Result<()> {
    let project_key = config.resolve_project(args.project.as_deref())?;
    let filters = args.filters.to_filter_state()?;

    let params = build_active_params(&filters, &project_key);
    let page = client.issues(params, args.page, args.all).await?;

    let search = args.search.as_deref().unwrap_or("");
    let visible = filter_issues(&page.issues, search, &filters.fix_version);

    if visible.is_empty() {
        output::print_message("No issues found");
        return Ok(());
    }

    output::print_table(&visible, |i| IssueRow::from(i));

    if !output::is_json_output() && !args.all && page.pages > 1 {
        println!(
            "Page {} of {} ({} issues total{})",
            page.current_page,
            page.pages,
            page.total,
            if page.has_next { ", more available" } else { "" }
        );
    }

    Ok(())
}
