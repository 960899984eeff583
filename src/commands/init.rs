use std::io::{self, Write};

use crate::config::Config;
use crate::error::{DashError, Result};

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("jdash configuration");
    println!("===================\n");

    print!("Dashboard API URL (e.g. http://localhost:5000/api): ");
    io::stdout().flush()?;

    let mut api_url = String::new();
    io::stdin().read_line(&mut api_url)?;
    let api_url = api_url.trim();

    if api_url.is_empty() {
        return Err(DashError::MissingApiUrl);
    }

    url::Url::parse(api_url).map_err(|e| DashError::InvalidUrl {
        url: api_url.to_string(),
        source: e,
    })?;

    print!("Username [optional]: ");
    io::stdout().flush()?;

    let mut username = String::new();
    io::stdin().read_line(&mut username)?;
    let username = username.trim();

    print!("Default project key (e.g. PROJ) [optional]: ");
    io::stdout().flush()?;

    let mut default_project = String::new();
    io::stdin().read_line(&mut default_project)?;
    let default_project = default_project.trim();

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DashError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let mut config_content = format!("api_url = \"{api_url}\"\n");
    if !username.is_empty() {
        config_content.push_str(&format!("username = \"{username}\"\n"));
    }
    if !default_project.is_empty() {
        config_content.push_str(&format!("default_project = \"{default_project}\"\n"));
    }

    std::fs::write(&config_path, config_content).map_err(|e| DashError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("Run 'jdash login' to start a session.");

    Ok(())
}
