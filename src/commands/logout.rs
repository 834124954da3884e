//! # Logout Command

use anyhow::Result;
use colored::Colorize;

use crate::api::ApiError;
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub async fn execute() -> Result<i32> {
    let client = super::build_client()?;

    match client.logout().await {
        Ok(()) => {
            println!("{} Logged out.", "✓".bright_green().bold());
            Ok(EXIT_SUCCESS)
        }
        // The local session is gone either way; report but soften network
        // failures so a dead server doesn't read as a failed logout.
        Err(ApiError::Network { message }) => {
            println!(
                "{} Local session cleared; the service could not be notified.",
                "✓".bright_green().bold()
            );
            eprintln!("  {} {}", "Details:".dimmed(), message.dimmed());
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
