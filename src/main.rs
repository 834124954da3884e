//! # VetDesk CLI
//!
//! Command-line client for a veterinary clinic's appointment-booking
//! service: book and manage appointments, maintain clinic holidays and
//! vaccine stock, and read the admin dashboard from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Authenticate
//! vetdesk login
//!
//! # Book an appointment
//! vetdesk appointments create --pet-name Milo --animal-type cat \
//!     --service checkup --date 2025-11-03 --time 14:30
//! ```

use clap::{Parser, Subcommand};
use vetdesk::commands;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "vetdesk")]
#[command(about = "VetDesk — clinic appointments from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Create an account and start a session
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign in to the booking service
    Login {
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show the account behind the current session
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check service configuration and session status
    Status,
    /// Manage appointments
    Appointments {
        #[command(subcommand)]
        command: AppointmentCommands,
    },
    /// Manage clinic holidays
    Holidays {
        #[command(subcommand)]
        command: HolidayCommands,
    },
    /// Manage vaccine stock
    Vaccines {
        #[command(subcommand)]
        command: VaccineCommands,
    },
    /// Admin dashboard analytics
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
    /// Inspect the audit trail
    Audit {
        #[command(subcommand)]
        command: AuditCommands,
    },
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Appointment subcommands
#[derive(Subcommand)]
enum AppointmentCommands {
    /// List appointments
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
        /// Filter by status (pending, confirmed, completed, cancelled)
        #[arg(long, short = 's')]
        status: Option<String>,
        /// Free-text search over pet and owner names
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one appointment
    Show {
        #[arg(value_name = "ID")]
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Book a new appointment
    Create {
        #[arg(long)]
        pet_name: String,
        #[arg(long)]
        animal_type: String,
        #[arg(long)]
        service: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM)
        #[arg(long)]
        time: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Update an appointment's details
    Update {
        #[arg(value_name = "ID")]
        id: i64,
        #[arg(long)]
        pet_name: String,
        #[arg(long)]
        animal_type: String,
        #[arg(long)]
        service: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (HH:MM)
        #[arg(long)]
        time: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Change an appointment's status
    SetStatus {
        #[arg(value_name = "ID")]
        id: i64,
        /// New status (pending, confirmed, completed, cancelled)
        #[arg(value_name = "STATUS")]
        status: String,
        #[arg(long)]
        json: bool,
    },
    /// Remove an appointment
    Cancel {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

/// Holiday subcommands
#[derive(Subcommand)]
enum HolidayCommands {
    /// List clinic holidays
    List {
        #[arg(long)]
        json: bool,
    },
    /// Add a holiday
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        /// Date (YYYY-MM-DD)
        #[arg(value_name = "DATE")]
        date: String,
    },
    /// Update a holiday
    Update {
        #[arg(value_name = "ID")]
        id: i64,
        #[arg(long)]
        name: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Remove a holiday
    Remove {
        #[arg(value_name = "ID")]
        id: i64,
    },
}

/// Vaccine stock subcommands
#[derive(Subcommand)]
enum VaccineCommands {
    /// Show current stock levels
    Stock {
        #[arg(long)]
        json: bool,
    },
    /// Add stock for a vaccine
    Add {
        #[arg(value_name = "VACCINE")]
        vaccine: String,
        #[arg(value_name = "QUANTITY")]
        quantity: u32,
    },
    /// Deduct stock for a vaccine
    Deduct {
        #[arg(value_name = "VACCINE")]
        vaccine: String,
        #[arg(value_name = "QUANTITY")]
        quantity: u32,
    },
}

/// Admin analytics subcommands
#[derive(Subcommand)]
enum AdminCommands {
    /// Headline dashboard counters
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Appointment counts by animal type
    AnimalTypes {
        #[arg(long)]
        json: bool,
    },
    /// Periodic summary reports
    Summary {
        #[arg(long)]
        json: bool,
    },
}

/// Audit log subcommands
#[derive(Subcommand)]
enum AuditCommands {
    /// List audit logs
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Show one audit log entry
    Show {
        #[arg(value_name = "ID")]
        id: i64,
        #[arg(long)]
        json: bool,
    },
}

/// Config subcommands
#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the service base URL
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let exit_code = run_command(cli.command).await;
    std::process::exit(exit_code);
}

async fn run_command(command: Commands) -> i32 {
    use vetdesk::exit_codes::*;

    match command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            let args = commands::register::RegisterArgs {
                name,
                email,
                password,
            };
            match commands::register::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Register error: {}", e);
                    EXIT_CONFIG_ERROR
                }
            }
        }
        Commands::Login { email, password } => {
            let args = commands::login::LoginArgs { email, password };
            match commands::login::execute(args).await {
                Ok(exit_code) => exit_code,
                Err(e) => {
                    eprintln!("Login error: {}", e);
                    EXIT_CONFIG_ERROR
                }
            }
        }
        Commands::Logout => match commands::logout::execute().await {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Logout error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
        Commands::Whoami { json } => match commands::whoami::execute(json).await {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Whoami error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
        Commands::Status => match commands::status::execute().await {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Status error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
        Commands::Appointments { command } => run_appointment_command(command).await,
        Commands::Holidays { command } => run_holiday_command(command).await,
        Commands::Vaccines { command } => run_vaccine_command(command).await,
        Commands::Admin { command } => run_admin_command(command).await,
        Commands::Audit { command } => run_audit_command(command).await,
        Commands::Config { command } => run_config_command(command),
    }
}

async fn run_appointment_command(command: AppointmentCommands) -> i32 {
    use vetdesk::exit_codes::*;

    let result = match command {
        AppointmentCommands::List {
            page,
            per_page,
            status,
            search,
            json,
        } => {
            let args = commands::appointments::ListArgs {
                page,
                per_page,
                status,
                search,
                json,
            };
            commands::appointments::execute_list(args).await
        }
        AppointmentCommands::Show { id, json } => {
            commands::appointments::execute_show(id, json).await
        }
        AppointmentCommands::Create {
            pet_name,
            animal_type,
            service,
            date,
            time,
            notes,
            json,
        } => {
            let args = commands::appointments::CreateArgs {
                pet_name,
                animal_type,
                service,
                date,
                time,
                notes,
                json,
            };
            commands::appointments::execute_create(args).await
        }
        AppointmentCommands::Update {
            id,
            pet_name,
            animal_type,
            service,
            date,
            time,
            notes,
            json,
        } => {
            let args = commands::appointments::UpdateArgs {
                id,
                pet_name,
                animal_type,
                service,
                date,
                time,
                notes,
                json,
            };
            commands::appointments::execute_update(args).await
        }
        AppointmentCommands::SetStatus { id, status, json } => {
            commands::appointments::execute_set_status(id, status, json).await
        }
        AppointmentCommands::Cancel { id } => commands::appointments::execute_cancel(id).await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Appointment error: {}", e);
            EXIT_ERROR
        }
    }
}

async fn run_holiday_command(command: HolidayCommands) -> i32 {
    use vetdesk::exit_codes::*;

    let result = match command {
        HolidayCommands::List { json } => commands::holidays::execute_list(json).await,
        HolidayCommands::Add { name, date } => commands::holidays::execute_add(name, date).await,
        HolidayCommands::Update { id, name, date } => {
            commands::holidays::execute_update(id, name, date).await
        }
        HolidayCommands::Remove { id } => commands::holidays::execute_remove(id).await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Holiday error: {}", e);
            EXIT_ERROR
        }
    }
}

async fn run_vaccine_command(command: VaccineCommands) -> i32 {
    use vetdesk::exit_codes::*;

    let result = match command {
        VaccineCommands::Stock { json } => commands::vaccines::execute_stock(json).await,
        VaccineCommands::Add { vaccine, quantity } => {
            commands::vaccines::execute_add(vaccine, quantity).await
        }
        VaccineCommands::Deduct { vaccine, quantity } => {
            commands::vaccines::execute_deduct(vaccine, quantity).await
        }
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Vaccine error: {}", e);
            EXIT_ERROR
        }
    }
}

async fn run_admin_command(command: AdminCommands) -> i32 {
    use vetdesk::exit_codes::*;

    let result = match command {
        AdminCommands::Stats { json } => commands::admin::execute_stats(json).await,
        AdminCommands::AnimalTypes { json } => commands::admin::execute_animal_types(json).await,
        AdminCommands::Summary { json } => commands::admin::execute_summary(json).await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Admin error: {}", e);
            EXIT_ERROR
        }
    }
}

async fn run_audit_command(command: AuditCommands) -> i32 {
    use vetdesk::exit_codes::*;

    let result = match command {
        AuditCommands::List {
            page,
            per_page,
            json,
        } => {
            let args = commands::audit::ListArgs {
                page,
                per_page,
                json,
            };
            commands::audit::execute_list(args).await
        }
        AuditCommands::Show { id, json } => commands::audit::execute_show(id, json).await,
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Audit error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_config_command(command: ConfigCommands) -> i32 {
    use vetdesk::exit_codes::*;

    let result = match command {
        ConfigCommands::Show { json } => commands::config::execute_show(json),
        ConfigCommands::SetUrl { url } => commands::config::execute_set_url(url),
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Config error: {}", e);
            EXIT_CONFIG_ERROR
        }
    }
}
