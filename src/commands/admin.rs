//! # Admin Commands
//!
//! Dashboard analytics. The backend enforces the admin role; a non-admin
//! session gets a 403 here.

use anyhow::Result;
use colored::Colorize;

use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub async fn execute_stats(json: bool) -> Result<i32> {
    let client = super::build_client()?;

    match client.admin_stats().await {
        Ok(stats) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(EXIT_SUCCESS);
            }
            println!("{}", "Clinic overview".bold());
            println!("  {:<20} {}", "appointments:", stats.total_appointments);
            println!("  {:<20} {}", "pending:", stats.pending);
            println!("  {:<20} {}", "confirmed:", stats.confirmed);
            println!("  {:<20} {}", "completed:", stats.completed);
            println!("  {:<20} {}", "cancelled:", stats.cancelled);
            println!("  {:<20} {}", "registered users:", stats.total_users);
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_animal_types(json: bool) -> Result<i32> {
    let client = super::build_client()?;

    match client.animal_type_analytics().await {
        Ok(analytics) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&analytics)?);
                return Ok(EXIT_SUCCESS);
            }
            if analytics.counts.is_empty() {
                println!("No appointment data yet.");
                return Ok(EXIT_SUCCESS);
            }
            // Stable output: sort by count descending, then name.
            let mut rows: Vec<_> = analytics.counts.iter().collect();
            rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            println!("{}", "Appointments by animal type".bold());
            for (animal_type, count) in rows {
                println!("  {:<15} {}", animal_type, count);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_summary(json: bool) -> Result<i32> {
    let client = super::build_client()?;

    match client.summary_reports().await {
        Ok(reports) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
                return Ok(EXIT_SUCCESS);
            }
            if reports.is_empty() {
                println!("No summary reports available.");
                return Ok(EXIT_SUCCESS);
            }
            println!(
                "{:<10} {:>13} {:>10} {:>10} {:>13}",
                "period".bold(),
                "appointments".bold(),
                "completed".bold(),
                "cancelled".bold(),
                "vaccinations".bold()
            );
            for report in &reports {
                println!(
                    "{:<10} {:>13} {:>10} {:>10} {:>13}",
                    report.period,
                    report.appointments,
                    report.completed,
                    report.cancelled,
                    report.vaccinations
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
