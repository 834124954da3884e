//! # Login Command
//!
//! Signs in against the booking service and persists the issued session
//! token for subsequent commands.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::api::LoginRequest;
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub struct LoginArgs {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Read one line from stdin after printing a prompt.
///
/// Used for credentials omitted on the command line; scripts pass flags,
/// humans get prompted.
pub(crate) fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

pub async fn execute(args: LoginArgs) -> Result<i32> {
    let client = super::build_client()?;

    let email = match args.email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt("Password")?,
    };

    if email.is_empty() || password.is_empty() {
        eprintln!("{} Email and password are required.", "Error:".red().bold());
        return Ok(EXIT_CONFIG_ERROR);
    }

    let request = LoginRequest { email, password };
    match client.login(&request).await {
        Ok(auth) => {
            println!(
                "{} Logged in as {} <{}>",
                "✓".bright_green().bold(),
                auth.user.name.bold(),
                auth.user.email
            );
            if auth.user.is_admin() {
                println!("  {} admin commands are available", "role:".dimmed());
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
