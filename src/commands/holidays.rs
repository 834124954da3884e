//! # Holiday Commands

use anyhow::Result;
use colored::Colorize;

use crate::api::HolidayRequest;
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub async fn execute_list(json: bool) -> Result<i32> {
    let client = super::build_client()?;

    match client.list_holidays().await {
        Ok(holidays) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&holidays)?);
                return Ok(EXIT_SUCCESS);
            }
            if holidays.is_empty() {
                println!("No holidays configured.");
                return Ok(EXIT_SUCCESS);
            }
            for holiday in &holidays {
                println!(
                    "{:>4}  {}  {}",
                    format!("#{}", holiday.id).bold(),
                    holiday.date,
                    holiday.name
                );
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_add(name: String, date: String) -> Result<i32> {
    let client = super::build_client()?;

    let request = HolidayRequest { name, date };
    match client.create_holiday(&request).await {
        Ok(holiday) => {
            println!(
                "{} Holiday added: {} on {}",
                "✓".bright_green().bold(),
                holiday.name.bold(),
                holiday.date
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_update(id: i64, name: String, date: String) -> Result<i32> {
    let client = super::build_client()?;

    let request = HolidayRequest { name, date };
    match client.update_holiday(id, &request).await {
        Ok(holiday) => {
            println!(
                "{} Holiday #{} updated: {} on {}",
                "✓".bright_green().bold(),
                holiday.id,
                holiday.name.bold(),
                holiday.date
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_remove(id: i64) -> Result<i32> {
    let client = super::build_client()?;

    match client.delete_holiday(id).await {
        Ok(()) => {
            println!("{} Holiday #{} removed.", "✓".bright_green().bold(), id);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
