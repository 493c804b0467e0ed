//! Backend API Client
//!
//! Thin JSON wrapper over the Pixel Pets REST backend. Every call resolves to
//! `Result<T, ApiError>`; non-2xx responses and network failures become
//! `ApiError` with a user-facing message.

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::{AdoptRequest, Credentials, Pet, Registration, User, UserUpdate};

const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Backend origin, fixed at build time
pub fn api_base() -> &'static str {
    option_env!("PIXEL_PETS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Failed request: HTTP status (0 for network failures) and display text
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn network() -> Self {
        Self {
            status: 0,
            message: "Network error".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (status {})", self.message, self.status)
    }
}

/// Message for a failed response: `message`, then `error`, then the status text
pub fn error_message(data: Option<&Value>, status_text: &str) -> String {
    let field = |key: &str| {
        data.and_then(|d| d.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    field("message")
        .or_else(|| field("error"))
        .or_else(|| (!status_text.is_empty()).then(|| status_text.to_string()))
        .unwrap_or_else(|| "Request failed".to_string())
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let content_type = response.headers().get("content-type");

    let data = if is_json(content_type.as_deref()) {
        match response.text().await {
            Ok(text) if !text.is_empty() => serde_json::from_str::<Value>(&text).ok(),
            _ => None,
        }
    } else {
        None
    };

    if !response.ok() {
        return Err(ApiError {
            status,
            message: error_message(data.as_ref(), &response.status_text()),
        });
    }

    serde_json::from_value(data.unwrap_or(Value::Null)).map_err(|e| {
        web_sys::console::error_1(&format!("[API] Unexpected response body: {}", e).into());
        ApiError {
            status,
            message: "Unexpected response from server".to_string(),
        }
    })
}

async fn request<T, B>(method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), path);
    let builder = RequestBuilder::new(&url)
        .method(method)
        .header("Content-Type", "application/json");

    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| {
        web_sys::console::error_1(&format!("[API] Could not build request {}: {}", path, e).into());
        ApiError::network()
    })?;

    let response = request.send().await.map_err(|e| {
        web_sys::console::error_1(&format!("[API] {} failed: {}", path, e).into());
        ApiError::network()
    })?;

    read_response(response).await
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>(Method::GET, path, None).await
}

async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    request(Method::POST, path, Some(body)).await
}

async fn delete(path: &str) -> Result<(), ApiError> {
    request::<(), ()>(Method::DELETE, path, None).await
}

// ========================
// Auth
// ========================

/// Returns the user id on success
pub async fn login(username: &str, password: &str) -> Result<i64, ApiError> {
    let body = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    post("/api/auth/login", &body).await
}

/// Returns the new user id
pub async fn register(username: &str, email: &str, password: &str) -> Result<i64, ApiError> {
    let body = Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    post("/api/auth/register", &body).await
}

// ========================
// Users
// ========================

pub async fn get_user(user_id: i64) -> Result<User, ApiError> {
    get(&format!("/api/users/{}", user_id)).await
}

pub async fn update_user(user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
    request(Method::PUT, &format!("/api/users/{}", user_id), Some(update)).await
}

pub async fn delete_user(user_id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/users/{}", user_id)).await
}

// ========================
// Pets
// ========================

pub async fn get_user_pets(user_id: i64) -> Result<Vec<Pet>, ApiError> {
    get(&format!("/api/pets/user/{}", user_id)).await
}

pub async fn get_pet(pet_id: i64) -> Result<Pet, ApiError> {
    get(&format!("/api/pets/{}", pet_id)).await
}

pub async fn adopt_pet(name: &str, pet_type: &str, user_id: i64) -> Result<Pet, ApiError> {
    let body = AdoptRequest {
        name: name.to_string(),
        pet_type: pet_type.to_string(),
        user_id,
    };
    post("/api/pets/adopt", &body).await
}

pub async fn feed_pet(pet_id: i64) -> Result<Pet, ApiError> {
    pet_action(pet_id, "feed").await
}

pub async fn play_with_pet(pet_id: i64) -> Result<Pet, ApiError> {
    pet_action(pet_id, "play").await
}

pub async fn rest_pet(pet_id: i64) -> Result<Pet, ApiError> {
    pet_action(pet_id, "rest").await
}

async fn pet_action(pet_id: i64, action: &str) -> Result<Pet, ApiError> {
    request::<Pet, ()>(Method::POST, &format!("/api/pets/{}/{}", pet_id, action), None).await
}

pub async fn delete_pet(pet_id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/pets/{}", pet_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_field_wins() {
        let data = json!({"message": "Pet not found: 7", "error": "Not Found"});
        assert_eq!(error_message(Some(&data), "Not Found"), "Pet not found: 7");
    }

    #[test]
    fn test_error_field_then_status_text() {
        let data = json!({"error": "Unauthorized"});
        assert_eq!(error_message(Some(&data), "ignored"), "Unauthorized");

        let empty = json!({"message": ""});
        assert_eq!(error_message(Some(&empty), "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(None, "Service Unavailable"), "Service Unavailable");
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(error_message(None, ""), "Request failed");
        assert_eq!(error_message(Some(&json!([1, 2])), ""), "Request failed");
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json(Some("application/json")));
        assert!(is_json(Some("application/json; charset=utf-8")));
        assert!(!is_json(Some("text/plain")));
        assert!(!is_json(None));
    }
}
