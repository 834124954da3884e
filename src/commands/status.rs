//! # Status Command
//!
//! Check service configuration and session state: which backend the CLI
//! points at, whether a credential is stored, and whether the backend still
//! accepts it.

use anyhow::Result;
use colored::Colorize;

use crate::api::ApiError;
use crate::credentials::CredentialStore;
use crate::exit_codes::*;

pub async fn execute() -> Result<i32> {
    let client = super::build_client()?;

    println!("{}", "VetDesk status".bold());
    println!("  {} {}", "service:".dimmed(), client.base_url());

    let Some(credential) = client.store().read() else {
        println!("  {} not logged in", "session:".dimmed());
        println!();
        println!("{} Run `vetdesk login` to sign in.", "Tip:".cyan().bold());
        return Ok(EXIT_SUCCESS);
    };

    match &credential.user {
        Some(user) => println!(
            "  {} {} <{}>",
            "session:".dimmed(),
            user.name,
            user.email
        ),
        None => println!("  {} token present", "session:".dimmed()),
    }

    // Verify the token against the backend rather than trusting the cache.
    match client.current_user().await {
        Ok(user) => {
            println!(
                "  {} {} (verified)",
                "account:".dimmed(),
                user.role.as_deref().unwrap_or("user")
            );
            println!();
            println!("{} Session is valid.", "✓".bright_green().bold());
            Ok(EXIT_SUCCESS)
        }
        Err(ApiError::Unauthorized { .. }) => {
            println!();
            println!(
                "{} Stored session was rejected by the service. Run `vetdesk login` again.",
                "✗".red().bold()
            );
            Ok(EXIT_AUTH_ERROR)
        }
        Err(ApiError::Network { message }) => {
            println!();
            println!("{} Cannot reach the service.", "✗".red().bold());
            eprintln!("  {} {}", "Details:".dimmed(), message.dimmed());
            Ok(EXIT_NETWORK_ERROR)
        }
        Err(e) => {
            println!();
            println!("{} {}", "✗".red().bold(), e);
            Ok(crate::errors::exit_code_for(&e))
        }
    }
}
