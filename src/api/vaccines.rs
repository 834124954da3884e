//! # Vaccine Stock API
//!
//! Per-vaccine stock levels. The backend deducts stock itself when a
//! vaccination appointment completes; the explicit deduct endpoint exists
//! for manual corrections.

use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, ApiError};

/// Body for `POST /vaccines/stock` (replenish) and `POST /vaccines/deduct`.
#[derive(Debug, Clone, Serialize)]
pub struct StockChangeRequest {
    pub vaccine_name: String,
    pub quantity: u32,
}

/// Stock level for one vaccine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VaccineStock {
    pub id: i64,
    pub vaccine_name: String,
    pub quantity: u32,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ApiClient {
    /// Current stock levels for all vaccines.
    pub async fn vaccine_stock(&self) -> Result<Vec<VaccineStock>, ApiError> {
        let response = self.get("/vaccines/stock", &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse vaccine stock: {}", e),
        })
    }

    /// Add stock for a vaccine, creating the record if it is new.
    pub async fn post_vaccine_stock(
        &self,
        request: &StockChangeRequest,
    ) -> Result<VaccineStock, ApiError> {
        let response = self.post("/vaccines/stock", Some(request)).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse vaccine stock response: {}", e),
        })
    }

    /// Deduct stock for a vaccine. The backend rejects deductions below zero.
    pub async fn deduct_vaccine_stock(
        &self,
        request: &StockChangeRequest,
    ) -> Result<VaccineStock, ApiError> {
        let response = self.post("/vaccines/deduct", Some(request)).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse vaccine deduct response: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_change_serialization() {
        let request = StockChangeRequest {
            vaccine_name: "rabies".to_string(),
            quantity: 10,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"vaccine_name":"rabies","quantity":10}"#
        );
    }

    #[test]
    fn test_stock_deserialization() {
        let json = r#"[
            {"id": 1, "vaccine_name": "rabies", "quantity": 42, "updated_at": "2025-10-01T10:00:00Z"},
            {"id": 2, "vaccine_name": "distemper", "quantity": 0}
        ]"#;
        let stock: Vec<VaccineStock> = serde_json::from_str(json).unwrap();
        assert_eq!(stock.len(), 2);
        assert_eq!(stock[1].quantity, 0);
        assert!(stock[1].updated_at.is_none());
    }
}
