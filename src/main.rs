mod cli;
mod client;
mod commands;
mod config;
mod dashboard;
mod error;
mod filters;
mod normalize;
mod output;
mod session;
mod types;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::DashClient;
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "jdash", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = DashClient::new(&config.api_url()?)?;

            match command {
                Commands::Login { username } => {
                    commands::auth::login(&client, &config, username).await?;
                }
                Commands::Logout => {
                    commands::auth::logout(&client).await?;
                }
                command => {
                    commands::auth::require_login()?;

                    match command {
                        Commands::Projects => {
                            commands::projects::list(&client).await?;
                        }
                        Commands::Issues(args) => {
                            commands::issues::list(&client, &config, args).await?;
                        }
                        Commands::Dashboard(args) => {
                            commands::dashboard::show(&client, &config, args).await?;
                        }
                        Commands::Timeline(args) => {
                            commands::timeline::show(&client, &config, args).await?;
                        }
                        Commands::Filters { project } => {
                            commands::options::list(&client, &config, project).await?;
                        }
                        Commands::Completions { .. }
                        | Commands::Init
                        | Commands::Login { .. }
                        | Commands::Logout => {
                            // Already handled above
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
