//! Frontend Models
//!
//! Data structures shared with the backend (matches backend DTOs).

use serde::{Deserialize, Serialize};

/// Account as returned by `GET /api/users/{id}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Pet record (matches backend `PetDto`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(alias = "hunger", default)]
    pub fullness: i64,
    #[serde(default)]
    pub happiness: i64,
    #[serde(default)]
    pub energy: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

fn default_level() -> i64 {
    1
}

// ========================
// Request payloads
// ========================

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; omitted fields stay unchanged
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_accepts_hunger_alias() {
        let pet: Pet = serde_json::from_str(
            r#"{"id":3,"name":"Mochi","type":"Cat","hunger":40,"happiness":70,"energy":55}"#,
        )
        .unwrap();
        assert_eq!(pet.fullness, 40);
        assert_eq!(pet.pet_type, "Cat");
        assert_eq!(pet.level, 1);
        assert_eq!(pet.user_id, None);
    }

    #[test]
    fn test_adopt_request_wire_names() {
        let body = serde_json::to_value(AdoptRequest {
            name: "Rex".into(),
            pet_type: "Dog".into(),
            user_id: 9,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name":"Rex","type":"Dog","userId":9}));
    }

    #[test]
    fn test_user_update_skips_missing_fields() {
        let body = serde_json::to_value(UserUpdate {
            password: Some("hunter22!".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"password":"hunter22!"}));
    }
}
