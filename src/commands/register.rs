//! # Register Command
//!
//! Creates an account and starts a session in one step.

use anyhow::Result;
use colored::Colorize;

use super::login::prompt;
use crate::api::RegisterRequest;
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub struct RegisterArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn execute(args: RegisterArgs) -> Result<i32> {
    let client = super::build_client()?;

    let name = match args.name {
        Some(name) => name,
        None => prompt("Name")?,
    };
    let email = match args.email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    // A password given as a flag confirms itself; prompted passwords are
    // typed twice.
    let (password, password_confirmation) = match args.password {
        Some(password) => (password.clone(), password),
        None => (prompt("Password")?, prompt("Confirm password")?),
    };

    if name.is_empty() || email.is_empty() || password.is_empty() {
        eprintln!(
            "{} Name, email, and password are required.",
            "Error:".red().bold()
        );
        return Ok(EXIT_CONFIG_ERROR);
    }

    let request = RegisterRequest {
        name,
        email,
        password,
        password_confirmation,
    };

    match client.register(&request).await {
        Ok(auth) => {
            println!(
                "{} Account created. Logged in as {} <{}>",
                "✓".bright_green().bold(),
                auth.user.name.bold(),
                auth.user.email
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
