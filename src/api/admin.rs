//! # Admin Analytics API
//!
//! Read-only dashboard figures. All three endpoints require an admin
//! session server-side; the client does not gate on role.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::client::{ApiClient, ApiError};

/// Headline counters for the admin dashboard.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminStats {
    #[serde(default)]
    pub total_appointments: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub confirmed: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub cancelled: u64,
    #[serde(default)]
    pub total_users: u64,
}

/// Appointment counts grouped by animal type.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnimalTypeAnalytics {
    /// animal type -> appointment count
    #[serde(default)]
    pub counts: HashMap<String, u64>,
}

/// One row of the periodic summary report.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryReport {
    /// Reporting period ("2025-10", a date, or a named range).
    pub period: String,
    #[serde(default)]
    pub appointments: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub cancelled: u64,
    #[serde(default)]
    pub vaccinations: u64,
}

impl ApiClient {
    /// Headline dashboard counters.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let response = self.get("/admin/stats", &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse admin stats: {}", e),
        })
    }

    /// Appointment counts per animal type.
    pub async fn animal_type_analytics(&self) -> Result<AnimalTypeAnalytics, ApiError> {
        let response = self.get("/admin/analytics/animal-types", &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse animal type analytics: {}", e),
        })
    }

    /// Periodic summary report rows.
    pub async fn summary_reports(&self) -> Result<Vec<SummaryReport>, ApiError> {
        let response = self.get("/admin/reports/summary", &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse summary reports: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_stats_deserialization() {
        let json = r#"{
            "total_appointments": 120,
            "pending": 12,
            "confirmed": 30,
            "completed": 70,
            "cancelled": 8,
            "total_users": 45
        }"#;
        let stats: AdminStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_appointments, 120);
        assert_eq!(stats.cancelled, 8);
    }

    #[test]
    fn test_admin_stats_tolerates_missing_fields() {
        let stats: AdminStats = serde_json::from_str(r#"{"total_appointments": 5}"#).unwrap();
        assert_eq!(stats.total_appointments, 5);
        assert_eq!(stats.total_users, 0);
    }

    #[test]
    fn test_animal_type_analytics_deserialization() {
        let json = r#"{"counts": {"dog": 64, "cat": 41, "bird": 7}}"#;
        let analytics: AnimalTypeAnalytics = serde_json::from_str(json).unwrap();
        assert_eq!(analytics.counts.get("dog"), Some(&64));
        assert_eq!(analytics.counts.len(), 3);
    }

    #[test]
    fn test_summary_report_deserialization() {
        let json = r#"[
            {"period": "2025-09", "appointments": 48, "completed": 40, "cancelled": 3, "vaccinations": 12},
            {"period": "2025-10", "appointments": 52}
        ]"#;
        let reports: Vec<SummaryReport> = serde_json::from_str(json).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].vaccinations, 12);
        assert_eq!(reports[1].completed, 0);
    }
}
