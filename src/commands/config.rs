//! # Config Commands
//!
//! Show and edit the persisted CLI configuration.

use anyhow::Result;
use colored::Colorize;

use crate::config::{Config, API_URL_ENV};
use crate::exit_codes::*;

pub fn execute_show(json: bool) -> Result<i32> {
    let config = Config::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(EXIT_SUCCESS);
    }

    println!("{}", "VetDesk configuration".bold());
    println!("  {} {}", "service url:".dimmed(), config.base_url());
    match std::env::var(API_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => {
            println!(
                "  {} overridden by {}",
                "source:".dimmed(),
                API_URL_ENV
            );
        }
        _ => match &config.api_url {
            Some(_) => println!("  {} config file", "source:".dimmed()),
            None => println!("  {} built-in default", "source:".dimmed()),
        },
    }
    Ok(EXIT_SUCCESS)
}

pub fn execute_set_url(url: String) -> Result<i32> {
    let mut config = Config::load()?;
    config.api_url = Some(url.trim_end_matches('/').to_string());
    config.save()?;

    println!(
        "{} Service URL set to {}",
        "✓".bright_green().bold(),
        config.api_url.as_deref().unwrap_or_default()
    );
    Ok(EXIT_SUCCESS)
}
