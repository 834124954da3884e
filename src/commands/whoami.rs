//! # Whoami Command
//!
//! Asks the backend which account owns the current session token. Unlike
//! `status`, this always makes the network call, so it doubles as a token
//! validity check.

use anyhow::Result;
use colored::Colorize;

use crate::credentials::CredentialStore;
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub async fn execute(json: bool) -> Result<i32> {
    let client = super::build_client()?;

    if client.store().read().is_none() {
        eprintln!(
            "{} Not logged in. Run `vetdesk login` first.",
            "Error:".red().bold()
        );
        return Ok(EXIT_CONFIG_ERROR);
    }

    match client.current_user().await {
        Ok(user) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                println!("{} <{}>", user.name.bold(), user.email);
                if let Some(role) = &user.role {
                    println!("  {} {}", "role:".dimmed(), role);
                }
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
