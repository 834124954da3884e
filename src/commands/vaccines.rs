//! # Vaccine Stock Commands

use anyhow::Result;
use colored::Colorize;

use crate::api::StockChangeRequest;
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub async fn execute_stock(json: bool) -> Result<i32> {
    let client = super::build_client()?;

    match client.vaccine_stock().await {
        Ok(stock) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&stock)?);
                return Ok(EXIT_SUCCESS);
            }
            if stock.is_empty() {
                println!("No vaccine stock recorded.");
                return Ok(EXIT_SUCCESS);
            }
            for entry in &stock {
                let quantity = if entry.quantity == 0 {
                    "out of stock".red().to_string()
                } else {
                    entry.quantity.to_string()
                };
                println!("  {:<20} {}", entry.vaccine_name, quantity);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_add(vaccine_name: String, quantity: u32) -> Result<i32> {
    let client = super::build_client()?;

    let request = StockChangeRequest {
        vaccine_name,
        quantity,
    };
    match client.post_vaccine_stock(&request).await {
        Ok(stock) => {
            println!(
                "{} {} stock is now {}",
                "✓".bright_green().bold(),
                stock.vaccine_name.bold(),
                stock.quantity
            );
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}

pub async fn execute_deduct(vaccine_name: String, quantity: u32) -> Result<i32> {
    let client = super::build_client()?;

    let request = StockChangeRequest {
        vaccine_name,
        quantity,
    };
    match client.deduct_vaccine_stock(&request).await {
        Ok(stock) => {
            println!(
                "{} {} stock is now {}",
                "✓".bright_green().bold(),
                stock.vaccine_name.bold(),
                stock.quantity
            );
            if stock.quantity == 0 {
                println!("  {} restock soon", "warning:".yellow());
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
