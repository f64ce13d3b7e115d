//! Frontend Models
//!
//! Data structures matching the Sweet Shop API.

use serde::{Deserialize, Serialize};

/// Catalog item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_veg: bool,
}

fn default_true() -> bool {
    true
}

/// Create/update body: all `Sweet` fields minus the server-assigned id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweetPayload {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: i64,
    pub image_url: Option<String>,
    pub is_veg: bool,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweet_deserializes_with_optional_fields_absent() {
        let json = r#"{"id":1,"name":"Ladoo","category":"Mithai","price":2.5,"quantity":10}"#;
        let sweet: Sweet = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(sweet.image_url, None);
        assert!(sweet.is_veg);
    }

    #[test]
    fn payload_serializes_without_id() {
        let payload = SweetPayload {
            name: "Brownie".into(),
            category: "Cake".into(),
            price: 3.0,
            quantity: 4,
            image_url: None,
            is_veg: false,
        };
        let json = serde_json::to_string(&payload).expect("should serialize");
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"is_veg\":false"));
    }
}
