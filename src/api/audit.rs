//! # Audit Log API
//!
//! Read-only access to the backend's audit trail.

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, ApiError};

/// Paging parameters for `GET /audit-logs`.
#[derive(Debug, Clone, Default)]
pub struct AuditLogQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl AuditLogQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

/// One audit-trail entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditLog {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Short action tag ("appointment.created", "login", ...).
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One page of audit logs.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditLogPage {
    pub data: Vec<AuditLog>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn audit_log_path(id: i64) -> String {
    format!("/audit-logs/{}", id)
}

impl ApiClient {
    /// List audit logs, newest first.
    pub async fn list_audit_logs(&self, query: &AuditLogQuery) -> Result<AuditLogPage, ApiError> {
        let response = self.get("/audit-logs", &query.to_pairs()).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse audit log list: {}", e),
        })
    }

    /// Fetch one audit log by id.
    pub async fn get_audit_log(&self, id: i64) -> Result<AuditLog, ApiError> {
        let response = self.get(&audit_log_path(id), &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse audit log: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_log_path() {
        assert_eq!(audit_log_path(19), "/audit-logs/19");
    }

    #[test]
    fn test_query_pairs() {
        let query = AuditLogQuery {
            page: Some(3),
            per_page: Some(50),
        };
        assert_eq!(
            query.to_pairs(),
            vec![("page", "3".to_string()), ("per_page", "50".to_string())]
        );
        assert!(AuditLogQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn test_audit_log_deserialization() {
        let json = r#"{
            "id": 19,
            "user_id": 4,
            "action": "appointment.status_changed",
            "description": "appointment 42: pending -> confirmed",
            "ip_address": "10.0.0.7",
            "created_at": "2025-10-30T16:02:11Z"
        }"#;
        let log: AuditLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.action, "appointment.status_changed");
        assert_eq!(log.user_id, Some(4));
    }

    #[test]
    fn test_audit_page_deserialization() {
        let json = r#"{
            "data": [{"id": 1, "action": "login"}],
            "current_page": 1,
            "per_page": 15,
            "last_page": 1,
            "total": 1
        }"#;
        let page: AuditLogPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.data[0].description.is_none());
    }
}
