//! Request validation
//!
//! Each request DTO reports problems as a field -> message map. An empty
//! map means the request is acceptable.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{AdoptPetRequest, LoginRequest, RegisterRequest, UserUpdateRequest};

pub type FieldErrors = BTreeMap<String, String>;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 30;
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 30;
const EMAIL_MAX: usize = 254;
const PET_NAME_MIN: usize = 2;
const PET_NAME_MAX: usize = 50;

pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn len(value: &str) -> usize {
    value.chars().count()
}

fn check_username(errors: &mut FieldErrors, value: &str) {
    if value.trim().is_empty() {
        errors.insert("username".into(), "Username is required".into());
    } else if !(USERNAME_MIN..=USERNAME_MAX).contains(&len(value)) {
        errors.insert("username".into(), "Username must be 3–30 characters".into());
    }
}

fn check_password(errors: &mut FieldErrors, value: &str) {
    if value.trim().is_empty() {
        errors.insert("password".into(), "Password is required".into());
    } else if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len(value)) {
        errors.insert("password".into(), "Password must be 8–30 characters".into());
    }
}

fn check_email(errors: &mut FieldErrors, value: &str) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.insert("email".into(), "Email is required".into());
    } else if len(trimmed) > EMAIL_MAX {
        errors.insert("email".into(), "Email is too long".into());
    } else if !email_regex().is_match(trimmed) {
        errors.insert("email".into(), "Email must be valid".into());
    }
}

/// Treat `None` and whitespace-only values as "not provided"
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Validate for LoginRequest {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_username(&mut errors, &self.username);
        check_password(&mut errors, &self.password);
        errors
    }
}

impl Validate for RegisterRequest {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_username(&mut errors, &self.username);
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors
    }
}

impl Validate for UserUpdateRequest {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(username) = provided(&self.username) {
            check_username(&mut errors, username.trim());
        }
        if let Some(email) = provided(&self.email) {
            check_email(&mut errors, email);
        }
        if let Some(password) = provided(&self.password) {
            check_password(&mut errors, password);
        }
        errors
    }
}

impl Validate for AdoptPetRequest {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name".into(), "Name is required".into());
        } else if !(PET_NAME_MIN..=PET_NAME_MAX).contains(&len(name)) {
            errors.insert("name".into(), "Name must be 2–50 characters".into());
        }
        if self.pet_type.trim().is_empty() {
            errors.insert("type".into(), "Type is required".into());
        }
        if self.user_id.is_none() {
            errors.insert("userId".into(), "User id is required".into());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_register_valid() {
        assert!(register("pixel", "pixel@pets.dev", "hunter22!").validate().is_empty());
    }

    #[test]
    fn test_register_required_fields() {
        let errors = register("", " ", "").validate();
        assert_eq!(errors["username"], "Username is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_register_lengths_and_format() {
        let errors = register("ab", "not-an-email", "short").validate();
        assert_eq!(errors["username"], "Username must be 3–30 characters");
        assert_eq!(errors["email"], "Email must be valid");
        assert_eq!(errors["password"], "Password must be 8–30 characters");

        let long_email = format!("{}@pets.dev", "a".repeat(250));
        let errors = register("pixel", &long_email, "hunter22!").validate();
        assert_eq!(errors["email"], "Email is too long");
    }

    #[test]
    fn test_login_requires_both() {
        let errors = LoginRequest::default().validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_update_ignores_blank_fields() {
        let req = UserUpdateRequest {
            username: Some("  ".into()),
            email: None,
            password: Some(String::new()),
        };
        assert!(req.validate().is_empty());

        let req = UserUpdateRequest {
            username: Some("x".into()),
            email: Some("bad".into()),
            password: None,
        };
        let errors = req.validate();
        assert!(errors.contains_key("username"));
        assert!(errors.contains_key("email"));
    }

    #[test]
    fn test_adopt_validation() {
        let req = AdoptPetRequest {
            name: " R ".into(),
            pet_type: String::new(),
            user_id: None,
        };
        let errors = req.validate();
        assert_eq!(errors["name"], "Name must be 2–50 characters");
        assert_eq!(errors["type"], "Type is required");
        assert_eq!(errors["userId"], "User id is required");
    }
}
