//! # Appointment Commands
//!
//! List, inspect, book, update, and cancel appointments.

use anyhow::Result;
use colored::Colorize;

use crate::api::{Appointment, AppointmentQuery, AppointmentRequest};
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub struct ListArgs {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub json: bool,
}

pub struct CreateArgs {
    pub pet_name: String,
    pub animal_type: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    pub json: bool,
}

pub struct UpdateArgs {
    pub id: i64,
    pub pet_name: String,
    pub animal_type: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    pub json: bool,
}

fn colored_status(status: &str) -> colored::ColoredString {
    match status {
        "pending" => status.yellow(),
        "confirmed" => status.cyan(),
        "completed" => status.green(),
        "cancelled" => status.red(),
        other => other.normal(),
    }
}

fn print_appointment(appointment: &Appointment) {
    println!(
        "{} {} ({})",
        format!("#{}", appointment.id).bold(),
        appointment.pet_name.bold(),
        appointment.animal_type
    );
    println!("  {} {}", "service:".dimmed(), appointment.service);
    println!(
        "  {} {} at {}",
        "when:".dimmed(),
        appointment.appointment_date,
        appointment.appointment_time
    );
    println!(
        "  {} {}",
        "status:".dimmed(),
        colored_status(&appointment.status)
    );
    if let Some(notes) = &appointment.notes {
        println!("  {} {}", "notes:".dimmed(), notes);
    }
}

pub async fn execute_list(args: ListArgs) -> Result<i32> {
    let client = super::build_client()?;

    let query = AppointmentQuery {
        page: args.page,
        per_page: args.per_page,
        status: args.status,
        search: args.search,
    };

    match client.list_appointments(&query).await {
        Ok(page) => {
            if args.json {
                let raw = serde_json::to_string_pretty(&page.data)?;
                println!("{}", raw);
                return Ok(EXIT_SUCCESS);
            }

            if page.data.is_empty() {
                println!("No appointments found.");
                return Ok(EXIT_SUCCESS);
            }

            for appointment in &page.data {
                println!(
                    "{:>5}  {:<12} {:<10} {:<10} {} {:<5}  {}",
                    format!("#{}", appointment.id).bold(),
                    appointment.pet_name,
                    appointment.animal_type,
                    appointment.service,
                    appointment.appointment_date,
                    appointment.appointment_time,
                    colored_status(&appointment.status)
                );
            }
            if page.last_page > 1 {
                println!(
                    "\n{}",
                    format!(
                        "page {} of {} ({} total)",
                        page.current_page, page.last_page, page.total
                    )
                    .dimmed()
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

pub async fn execute_show(id: i64, json: bool) -> Result<i32> {
    let client = super::build_client()?;

    match client.get_appointment(id).await {
        Ok(appointment) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&appointment)?);
            } else {
                print_appointment(&appointment);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_create(args: CreateArgs) -> Result<i32> {
    let client = super::build_client()?;

    let request = AppointmentRequest {
        pet_name: args.pet_name,
        animal_type: args.animal_type,
        service: args.service,
        appointment_date: args.date,
        appointment_time: args.time,
        notes: args.notes,
    };

    match client.create_appointment(&request).await {
        Ok(appointment) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&appointment)?);
            } else {
                println!("{} Appointment booked.", "✓".bright_green().bold());
                print_appointment(&appointment);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_update(args: UpdateArgs) -> Result<i32> {
    let client = super::build_client()?;

    let request = AppointmentRequest {
        pet_name: args.pet_name,
        animal_type: args.animal_type,
        service: args.service,
        appointment_date: args.date,
        appointment_time: args.time,
        notes: args.notes,
    };

    match client.update_appointment(args.id, &request).await {
        Ok(appointment) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&appointment)?);
            } else {
                println!("{} Appointment updated.", "✓".bright_green().bold());
                print_appointment(&appointment);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_set_status(id: i64, status: String, json: bool) -> Result<i32> {
    let client = super::build_client()?;

    match client.update_appointment_status(id, &status).await {
        Ok(appointment) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&appointment)?);
            } else {
                println!(
                    "{} Appointment #{} is now {}.",
                    "✓".bright_green().bold(),
                    appointment.id,
                    colored_status(&appointment.status)
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

pub async fn execute_cancel(id: i64) -> Result<i32> {
    let client = super::build_client()?;

    match client.delete_appointment(id).await {
        Ok(()) => {
            println!(
                "{} Appointment #{} removed.",
                "✓".bright_green().bold(),
                id
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
