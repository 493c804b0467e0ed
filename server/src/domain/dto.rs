//! Wire types
//!
//! Request and response bodies exchanged with the UI. Field names are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

use super::pet::Pet;
use super::user::User;

/// Public view of a user (no password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update; `None` or blank keeps the current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserUpdateRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdoptPetRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub user_id: Option<i64>,
}

/// Pet fields accepted by the generic create/update endpoints
///
/// `hunger` is still accepted as an alias of `fullness`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub level: Option<i64>,
    #[serde(alias = "hunger")]
    pub fullness: Option<i64>,
    pub happiness: Option<i64>,
    pub energy: Option<i64>,
    pub user_id: Option<i64>,
}

/// Public view of a pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub level: i64,
    pub fullness: i64,
    pub happiness: i64,
    pub energy: i64,
    pub user_id: i64,
    pub created_at: i64,
}

impl From<&Pet> for PetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name.clone(),
            pet_type: pet.pet_type.clone(),
            level: pet.level,
            fullness: pet.fullness,
            happiness: pet.happiness,
            energy: pet.energy,
            user_id: pet.user_id,
            created_at: pet.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_input_accepts_hunger_alias() {
        let input: PetInput =
            serde_json::from_str(r#"{"name":"Rex","type":"Dog","hunger":42,"userId":3}"#).unwrap();
        assert_eq!(input.fullness, Some(42));
        assert_eq!(input.pet_type.as_deref(), Some("Dog"));
        assert_eq!(input.user_id, Some(3));
        assert_eq!(input.level, None);
    }

    #[test]
    fn test_pet_dto_wire_names() {
        let pet = Pet::adopt(9, "Rex", "Dog", 1_000);
        let json = serde_json::to_value(PetDto::from(&pet)).unwrap();
        assert_eq!(json["type"], "Dog");
        assert_eq!(json["userId"], 9);
        assert_eq!(json["createdAt"], 1_000);
        assert_eq!(json["fullness"], 100);
        assert!(json.get("lastTickAt").is_none());
    }

    #[test]
    fn test_adopt_request_missing_fields_default() {
        let req: AdoptPetRequest = serde_json::from_str(r#"{"name":"Rex"}"#).unwrap();
        assert_eq!(req.pet_type, "");
        assert_eq!(req.user_id, None);
    }
}
