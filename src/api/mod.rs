//! # API Client Module
//!
//! This module provides the HTTP client for communicating with the VetDesk
//! booking API.

pub mod admin;
pub mod appointments;
pub mod audit;
pub mod auth;
pub mod client;
pub mod holidays;
pub mod vaccines;

// Re-export commonly used types for convenience
pub use admin::{AdminStats, AnimalTypeAnalytics, SummaryReport};
pub use appointments::{Appointment, AppointmentPage, AppointmentQuery, AppointmentRequest};
pub use audit::{AuditLog, AuditLogPage, AuditLogQuery};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use client::{ApiClient, ApiError};
pub use holidays::{Holiday, HolidayRequest};
pub use vaccines::{StockChangeRequest, VaccineStock};
