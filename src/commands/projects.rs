use tabled::Tabled;

use crate::client::DashClient;
use crate::error::Result;
use crate::output;
use crate::types::Project;

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    project_type: String,
    #[tabled(rename = "Lead")]
    lead: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            key: project.key.clone(),
            name: output::truncate(&project.name, 40),
            project_type: project.project_type.clone().unwrap_or_default(),
            lead: project.lead_name.clone().unwrap_or_default(),
        }
    }
}

pub async fn list(client: &DashClient) -> Result<()> {
    let projects = client.projects().await?;
    output::print_table(&projects, |p| ProjectRow::from(p));
    Ok(())
}
