use std::io::{self, Write};

use crate::client::DashClient;
use crate::config::Config;
use crate::error::{DashError, Result};
use crate::output;
use crate::session::Session;

pub async fn login(client: &DashClient, config: &Config, username: Option<String>) -> Result<()> {
    let username = match username.or_else(|| config.username.clone()) {
        Some(u) => u,
        None => prompt("Username: ")?,
    };

    let password = prompt("Password: ")?;
    if password.is_empty() {
        return Err(DashError::LoginFailed("empty password".to_string()));
    }

    client.login(&username, &password).await?;
    Session::set_logged_in(&username);

    output::print_message(&format!("Logged in as {username}"));
    Ok(())
}

pub async fn logout(client: &DashClient) -> Result<()> {
    client.logout().await?;
    Session::clear();
    output::print_message("Logged out");
    Ok(())
}

/// Fail early with a clear error instead of a backend 401.
pub fn require_login() -> Result<()> {
    if Session::load().is_logged_in() {
        Ok(())
    } else {
        Err(DashError::NotLoggedIn)
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
