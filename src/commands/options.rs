use colored::Colorize;

use crate::client::DashClient;
use crate::config::Config;
use crate::error::Result;
use crate::output;

pub async fn list(client: &DashClient, config: &Config, project: Option<String>) -> Result<()> {
    let project_key = config.resolve_project(project.as_deref())?;
    let options = client.filter_options(&project_key).await?;

    output::print_item(&options, |options| {
        print_values("Statuses", &options.statuses);
        print_values("Types", &options.types);
        print_values("Priorities", &options.priorities);
        print_values("Versions", &options.versions);

        print_people("Assignees", &options.assignees);
        print_people("Reporters", &options.reporters);
    });

    Ok(())
}

fn print_values(title: &str, values: &[String]) {
    println!("{}", title.bold());
    if values.is_empty() {
        println!("  (none)");
    }
    for value in values {
        println!("  {value}");
    }
    println!();
}

fn print_people(title: &str, people: &[crate::types::NamedOption]) {
    println!("{}", title.bold());
    if people.is_empty() {
        println!("  (none)");
    }
    for person in people {
        println!("  {} ({})", person.name, person.id);
    }
    println!();
}
