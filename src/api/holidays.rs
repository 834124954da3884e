//! # Holidays API
//!
//! Clinic closure days. Appointments on a holiday are rejected by the
//! backend; this client only manages the records.

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, ApiError};

/// Body for creating and updating a holiday.
#[derive(Debug, Clone, Serialize)]
pub struct HolidayRequest {
    pub name: String,
    /// Date in `YYYY-MM-DD` form.
    pub date: String,
}

/// A clinic holiday.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn holiday_path(id: i64) -> String {
    format!("/holidays/{}", id)
}

impl ApiClient {
    /// List all holidays.
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        let response = self.get("/holidays", &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse holiday list: {}", e),
        })
    }

    /// Create a holiday.
    pub async fn create_holiday(&self, request: &HolidayRequest) -> Result<Holiday, ApiError> {
        let response = self.post("/holidays", Some(request)).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse created holiday: {}", e),
        })
    }

    /// Update a holiday.
    pub async fn update_holiday(
        &self,
        id: i64,
        request: &HolidayRequest,
    ) -> Result<Holiday, ApiError> {
        let response = self.put(&holiday_path(id), request).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse updated holiday: {}", e),
        })
    }

    /// Delete a holiday.
    pub async fn delete_holiday(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&holiday_path(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holiday_path() {
        assert_eq!(holiday_path(3), "/holidays/3");
    }

    #[test]
    fn test_holiday_request_serialization() {
        let request = HolidayRequest {
            name: "Christmas Day".to_string(),
            date: "2025-12-25".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"Christmas Day","date":"2025-12-25"}"#
        );
    }

    #[test]
    fn test_holiday_list_deserialization() {
        let json = r#"[
            {"id": 1, "name": "New Year", "date": "2026-01-01"},
            {"id": 2, "name": "Christmas Day", "date": "2025-12-25", "created_at": "2025-01-10T08:00:00Z"}
        ]"#;
        let holidays: Vec<Holiday> = serde_json::from_str(json).unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].name, "New Year");
        assert!(holidays[0].created_at.is_none());
    }
}
