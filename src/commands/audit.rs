//! # Audit Log Commands

use anyhow::Result;
use colored::Colorize;

use crate::api::AuditLogQuery;
use crate::errors::{display_api_error, exit_code_for};
use crate::exit_codes::*;

pub struct ListArgs {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub json: bool,
}

pub async fn execute_list(args: ListArgs) -> Result<i32> {
    let client = super::build_client()?;

    let query = AuditLogQuery {
        page: args.page,
        per_page: args.per_page,
    };

    match client.list_audit_logs(&query).await {
        Ok(page) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&page.data)?);
                return Ok(EXIT_SUCCESS);
            }
            if page.data.is_empty() {
                println!("No audit logs.");
                return Ok(EXIT_SUCCESS);
            }
            for log in &page.data {
                let when = log.created_at.as_deref().unwrap_or("-");
                println!(
                    "{:>6}  {}  {:<30} {}",
                    format!("#{}", log.id).bold(),
                    when.dimmed(),
                    log.action,
                    log.description.as_deref().unwrap_or("")
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

    match client.get_audit_log(id).await {
        Ok(log) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&log)?);
                return Ok(EXIT_SUCCESS);
            }
            println!("{} {}", format!("#{}", log.id).bold(), log.action.bold());
            if let Some(description) = &log.description {
                println!("  {} {}", "detail:".dimmed(), description);
            }
            if let Some(user_id) = log.user_id {
                println!("  {} {}", "user:".dimmed(), user_id);
            }
            if let Some(ip) = &log.ip_address {
                println!("  {} {}", "ip:".dimmed(), ip);
            }
            if let Some(when) = &log.created_at {
                println!("  {} {}", "at:".dimmed(), when);
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            display_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
