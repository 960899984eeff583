use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::error::{DashError, Result};
use crate::filters::FilterState;

#[derive(Parser)]
#[command(name = "jdash")]
#[command(about = "A terminal dashboard for Jira projects", version)]
#[command(after_help = "EXAMPLES:
    jdash projects                      List available projects
    jdash issues -p PROJ --search bug   List issues matching a search
    jdash dashboard -p PROJ             Show the project dashboard
    jdash timeline -p PROJ --days 90    Created vs resolved over 90 days")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects
    #[command(after_help = "EXAMPLES:
    jdash projects
    jdash projects --json")]
    Projects,
    /// List issues with server-side filters and client-side search
    #[command(after_help = "EXAMPLES:
    jdash issues -p PROJ
    jdash issues -p PROJ --status Done --fix-version \"Versão 1.0\"
    jdash issues -p PROJ --search login --page 2
    jdash issues -p PROJ --all")]
    Issues(IssueListArgs),
    /// Show the project dashboard (totals, charts, timeline)
    #[command(after_help = "EXAMPLES:
    jdash dashboard -p PROJ
    jdash dashboard -p PROJ --status \"In Progress\"")]
    Dashboard(DashboardArgs),
    /// Show the created-vs-resolved timeline
    #[command(after_help = "EXAMPLES:
    jdash timeline -p PROJ
    jdash timeline -p PROJ --days 365")]
    Timeline(TimelineArgs),
    /// Show distinct filter values for a project
    #[command(after_help = "EXAMPLES:
    jdash filters -p PROJ")]
    Filters {
        /// Project key (uses default if not specified)
        #[arg(long, short)]
        project: Option<String>,
    },
    /// Log in to the dashboard backend
    #[command(after_help = "EXAMPLES:
    jdash login -u admin")]
    Login {
        /// Username (falls back to the configured one)
        #[arg(long, short)]
        username: Option<String>,
    },
    /// Log out and clear the local session
    Logout,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    jdash completions bash > ~/.bash_completion.d/jdash
    jdash completions zsh > ~/.zfunc/_jdash")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

/// Server-side filter flags shared by issue, dashboard, and timeline views.
///
/// Selector sentinels (`__all__`, `sem-valor`) are accepted and resolve to
/// "no filter"; dates must be YYYY-MM-DD.
#[derive(Args, Clone, Default)]
pub struct FilterArgs {
    /// Filter by status
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by assignee email/id
    #[arg(long)]
    pub assignee: Option<String>,

    /// Filter by reporter email/id
    #[arg(long)]
    pub reporter: Option<String>,

    /// Filter by exact fix version/release (accent/space-insensitive)
    #[arg(long)]
    pub fix_version: Option<String>,

    /// Filter by issue type
    #[arg(long = "type")]
    pub issue_type: Option<String>,

    /// Filter by priority
    #[arg(long)]
    pub priority: Option<String>,

    /// Only issues created on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub created_after: Option<String>,

    /// Only issues created on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub created_before: Option<String>,
}

impl FilterArgs {
    /// Resolve CLI selections into filter state, validating date formats.
    pub fn to_filter_state(&self) -> Result<FilterState> {
        for date in [&self.created_after, &self.created_before].into_iter().flatten() {
            if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err(DashError::InvalidDate(date.clone()));
            }
        }

        let mut filters = FilterState::default();
        let pairs = [
            ("status", &self.status),
            ("assignee_email", &self.assignee),
            ("reporter_email", &self.reporter),
            ("fix_version", &self.fix_version),
            ("issue_type", &self.issue_type),
            ("priority", &self.priority),
            ("created_after", &self.created_after),
            ("created_before", &self.created_before),
        ];
        for (key, value) in pairs {
            if let Some(raw) = value {
                filters.set(key, raw);
            }
        }
        Ok(filters)
    }
}

#[derive(Args)]
pub struct IssueListArgs {
    /// Project key (uses default if not specified)
    #[arg(long, short)]
    pub project: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Free-text search over key, summary, status, type, and versions
    #[arg(long, short)]
    pub search: Option<String>,

    /// Page to fetch
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Fetch all pages (may be slow for large projects)
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct DashboardArgs {
    /// Project key (uses default if not specified)
    #[arg(long, short)]
    pub project: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Free-text search applied to the recent-issues table
    #[arg(long, short)]
    pub search: Option<String>,

    /// Timeline lookback window in days
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(30..=365))]
    pub days: u32,
}

#[derive(Args)]
pub struct TimelineArgs {
    /// Project key (uses default if not specified)
    #[arg(long, short)]
    pub project: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Lookback window in days
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(30..=365))]
    pub days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_resolve_sentinels() {
        let args = FilterArgs {
            status: Some("Done".to_string()),
            priority: Some("__all__".to_string()),
            fix_version: Some("sem-valor".to_string()),
            ..Default::default()
        };
        let filters = args.to_filter_state().unwrap();
        assert_eq!(filters.status, "Done");
        assert_eq!(filters.priority, "");
        assert_eq!(filters.fix_version, "");
    }

    #[test]
    fn test_filter_args_reject_bad_date() {
        let args = FilterArgs {
            created_after: Some("01/02/2024".to_string()),
            ..Default::default()
        };
        assert!(args.to_filter_state().is_err());

        let args = FilterArgs {
            created_after: Some("2024-02-01".to_string()),
            ..Default::default()
        };
        assert_eq!(args.to_filter_state().unwrap().created_after, "2024-02-01");
    }
}
