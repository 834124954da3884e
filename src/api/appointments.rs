//! # Appointments API
//!
//! CRUD and status transitions for clinic appointments.
//!
//! ## Endpoints
//!
//! - `GET /appointments` - paged list with status/search filters
//! - `POST /appointments` - book an appointment
//! - `GET /appointments/{id}` - fetch one appointment
//! - `PUT /appointments/{id}` - update an appointment
//! - `PATCH /appointments/{id}/status` - change only the status
//! - `DELETE /appointments/{id}` - remove an appointment
//!
//! Records pass through untouched: the client neither validates nor
//! transforms fields, the backend owns all business rules (slot
//! availability, holiday collisions, stock deduction for vaccinations).

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, ApiError};

// =============================================================================
// Request Types
// =============================================================================

/// Body for booking (`POST /appointments`) and updating
/// (`PUT /appointments/{id}`) an appointment.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentRequest {
    pub pet_name: String,
    /// Free-form animal type ("dog", "cat", "bird", ...).
    pub animal_type: String,
    /// Requested service ("checkup", "vaccination", "grooming", ...).
    pub service: String,
    /// Date in `YYYY-MM-DD` form; the backend validates it.
    pub appointment_date: String,
    /// Time in `HH:MM` form.
    pub appointment_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for `PATCH /appointments/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// Query filters for `GET /appointments`.
#[derive(Debug, Clone, Default)]
pub struct AppointmentQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Filter to one status ("pending", "confirmed", "completed", "cancelled").
    pub status: Option<String>,
    /// Free-text search over pet and owner names.
    pub search: Option<String>,
}

impl AppointmentQuery {
    /// Flatten the set filters into query pairs.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// An appointment record as returned by the backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Appointment {
    pub id: i64,
    /// Owning account; absent in some admin listings.
    #[serde(default)]
    pub user_id: Option<i64>,
    pub pet_name: String,
    pub animal_type: String,
    pub service: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One page of appointments.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentPage {
    pub data: Vec<Appointment>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn appointment_path(id: i64) -> String {
    format!("/appointments/{}", id)
}

fn appointment_status_path(id: i64) -> String {
    format!("/appointments/{}/status", id)
}

// =============================================================================
// API Client Methods
// =============================================================================

impl ApiClient {
    /// List appointments, newest first, with optional paging and filters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use vetdesk::api::{ApiClient, appointments::AppointmentQuery};
    /// use vetdesk::credentials::MemoryCredentialStore;
    ///
    /// async fn pending() -> Result<(), vetdesk::api::ApiError> {
    ///     let store = Arc::new(MemoryCredentialStore::with_token("12|fR2mXw"));
    ///     let client = ApiClient::new("http://localhost:8000/api".to_string(), store);
    ///     let query = AppointmentQuery {
    ///         status: Some("pending".to_string()),
    ///         ..Default::default()
    ///     };
    ///     let page = client.list_appointments(&query).await?;
    ///     println!("{} pending appointments", page.total);
    ///     Ok(())
    /// }
    /// ```
    pub async fn list_appointments(
        &self,
        query: &AppointmentQuery,
    ) -> Result<AppointmentPage, ApiError> {
        let response = self.get("/appointments", &query.to_pairs()).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse appointment list: {}", e),
        })
    }

    /// Fetch a single appointment by id.
    pub async fn get_appointment(&self, id: i64) -> Result<Appointment, ApiError> {
        let response = self.get(&appointment_path(id), &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse appointment: {}", e),
        })
    }

    /// Book a new appointment.
    pub async fn create_appointment(
        &self,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        let response = self.post("/appointments", Some(request)).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse created appointment: {}", e),
        })
    }

    /// Replace an appointment's details.
    pub async fn update_appointment(
        &self,
        id: i64,
        request: &AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        let response = self.put(&appointment_path(id), request).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse updated appointment: {}", e),
        })
    }

    /// Change only an appointment's status.
    pub async fn update_appointment_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Appointment, ApiError> {
        let body = StatusUpdateRequest {
            status: status.to_string(),
        };
        let response = self.patch(&appointment_status_path(id), &body).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse appointment status response: {}", e),
        })
    }

    /// Delete an appointment.
    pub async fn delete_appointment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&appointment_path(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(appointment_path(42), "/appointments/42");
        assert_eq!(appointment_status_path(42), "/appointments/42/status");
    }

    #[test]
    fn test_query_pairs_full() {
        let query = AppointmentQuery {
            page: Some(2),
            per_page: Some(25),
            status: Some("pending".to_string()),
            search: Some("milo".to_string()),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "2".to_string()),
                ("per_page", "25".to_string()),
                ("status", "pending".to_string()),
                ("search", "milo".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_empty() {
        assert!(AppointmentQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_status_body_serialization() {
        let body = StatusUpdateRequest {
            status: "confirmed".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"confirmed"}"#
        );
    }

    #[test]
    fn test_request_omits_absent_notes() {
        let request = AppointmentRequest {
            pet_name: "Milo".to_string(),
            animal_type: "cat".to_string(),
            service: "checkup".to_string(),
            appointment_date: "2025-11-03".to_string(),
            appointment_time: "14:30".to_string(),
            notes: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("notes"));
    }

    #[test]
    fn test_appointment_deserialization() {
        let json = r#"{
            "id": 42,
            "user_id": 3,
            "pet_name": "Milo",
            "animal_type": "cat",
            "service": "vaccination",
            "appointment_date": "2025-11-03",
            "appointment_time": "14:30",
            "status": "pending",
            "notes": "first visit",
            "created_at": "2025-10-28T09:12:44Z",
            "updated_at": "2025-10-28T09:12:44Z"
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.id, 42);
        assert_eq!(appointment.status, "pending");
        assert_eq!(appointment.notes.as_deref(), Some("first visit"));
    }

    #[test]
    fn test_appointment_minimal_deserialization() {
        let json = r#"{
            "id": 7,
            "pet_name": "Rex",
            "animal_type": "dog",
            "service": "grooming",
            "appointment_date": "2025-12-01",
            "appointment_time": "09:00",
            "status": "confirmed"
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert!(appointment.user_id.is_none());
        assert!(appointment.notes.is_none());
    }

    #[test]
    fn test_page_deserialization() {
        let json = r#"{
            "data": [{
                "id": 1,
                "pet_name": "Milo",
                "animal_type": "cat",
                "service": "checkup",
                "appointment_date": "2025-11-03",
                "appointment_time": "14:30",
                "status": "pending"
            }],
            "current_page": 1,
            "per_page": 15,
            "last_page": 4,
            "total": 52
        }"#;
        let page: AppointmentPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 52);
        assert_eq!(page.last_page, 4);
    }
}
