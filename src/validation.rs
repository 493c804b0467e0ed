//! Form Validation
//!
//! Client-side checks run before any request is sent. Each check reports the
//! first failing field so the form can focus it.

use std::sync::OnceLock;

use regex::Regex;

pub const ALLOWED_PET_TYPES: [&str; 3] = ["Cat", "Dog", "Dragon"];
pub const DELETE_PHRASE: &str = "DELETE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    Name,
    PetType,
    UserId,
    Confirm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormError {
    pub field: Field,
    pub message: &'static str,
}

impl FormError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub type FormResult = Result<(), FormError>;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn username_length_ok(username: &str) -> bool {
    (3..=30).contains(&username.chars().count())
}

pub fn validate_login(username: &str, password: &str) -> FormResult {
    if username.trim().is_empty() {
        return Err(FormError::new(Field::Username, "Username and password are required."));
    }
    if password.is_empty() {
        return Err(FormError::new(Field::Password, "Username and password are required."));
    }
    Ok(())
}

pub fn validate_register(username: &str, email: &str, password: &str) -> FormResult {
    let (username, email) = (username.trim(), email.trim());
    if username.is_empty() || email.is_empty() || password.is_empty() {
        let field = if username.is_empty() {
            Field::Username
        } else if email.is_empty() {
            Field::Email
        } else {
            Field::Password
        };
        return Err(FormError::new(field, "All fields are required."));
    }
    check_identity(username, email)?;
    validate_new_password(password)
}

/// Username/email section of the settings page
pub fn validate_profile(username: &str, email: &str) -> FormResult {
    let (username, email) = (username.trim(), email.trim());
    if username.is_empty() || email.is_empty() {
        let field = if username.is_empty() { Field::Username } else { Field::Email };
        return Err(FormError::new(field, "Username and email are required."));
    }
    check_identity(username, email)
}

fn check_identity(username: &str, email: &str) -> FormResult {
    if !username_length_ok(username) {
        return Err(FormError::new(Field::Username, "Username must be 3–30 characters."));
    }
    if !is_valid_email(email) {
        return Err(FormError::new(Field::Email, "Please enter a valid email address."));
    }
    Ok(())
}

pub fn validate_new_password(password: &str) -> FormResult {
    if password.is_empty() {
        return Err(FormError::new(Field::Password, "Password is required."));
    }
    if password.chars().count() < 8 {
        return Err(FormError::new(Field::Password, "Password must be at least 8 characters."));
    }
    Ok(())
}

pub fn validate_adopt(
    name: &str,
    pet_type: &str,
    user_id: Option<i64>,
    allowed_types: &[&str],
) -> FormResult {
    if name.trim().is_empty() {
        return Err(FormError::new(Field::Name, "Please enter a pet name."));
    }
    if pet_type.is_empty() {
        return Err(FormError::new(Field::PetType, "Please select a pet type."));
    }
    if user_id.is_none() {
        return Err(FormError::new(Field::UserId, "Missing user ID."));
    }
    if !allowed_types.contains(&pet_type) {
        return Err(FormError::new(Field::PetType, "Invalid pet type."));
    }
    Ok(())
}

/// Account deletion needs the exact phrase, case included
pub fn validate_delete_phrase(input: &str) -> FormResult {
    if input == DELETE_PHRASE {
        Ok(())
    } else {
        Err(FormError::new(Field::Confirm, "Please type \"DELETE\" exactly to confirm."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login("  ", "secret").unwrap_err().field, Field::Username);
        assert_eq!(
            validate_login("mochi", "").unwrap_err().message,
            "Username and password are required."
        );
        assert!(validate_login("mochi", "x").is_ok());
    }

    #[test]
    fn test_register_messages_in_order() {
        let err = validate_register("", "a@b.co", "password1").unwrap_err();
        assert_eq!((err.field, err.message), (Field::Username, "All fields are required."));

        let err = validate_register("ab", "a@b.co", "password1").unwrap_err();
        assert_eq!(err.message, "Username must be 3–30 characters.");

        let err = validate_register(&"x".repeat(31), "a@b.co", "password1").unwrap_err();
        assert_eq!(err.field, Field::Username);

        let err = validate_register("mochi", "not-an-email", "password1").unwrap_err();
        assert_eq!((err.field, err.message), (Field::Email, "Please enter a valid email address."));

        let err = validate_register("mochi", "a@b.co", "short").unwrap_err();
        assert_eq!(err.message, "Password must be at least 8 characters.");

        assert!(validate_register(" mochi ", " a@b.co ", "password1").is_ok());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("pixel@pets.io"));
        assert!(!is_valid_email("pixel@pets"));
        assert!(!is_valid_email("@pets.io"));
    }

    #[test]
    fn test_profile_validation() {
        assert_eq!(
            validate_profile("mochi", " ").unwrap_err(),
            FormError::new(Field::Email, "Username and email are required.")
        );
        assert!(validate_profile("mochi", "m@p.io").is_ok());
    }

    #[test]
    fn test_new_password() {
        assert_eq!(validate_new_password("").unwrap_err().message, "Password is required.");
        assert!(validate_new_password("12345678").is_ok());
    }

    #[test]
    fn test_adopt_checks_in_order() {
        let types = &ALLOWED_PET_TYPES;
        assert_eq!(validate_adopt(" ", "", None, types).unwrap_err().message, "Please enter a pet name.");
        assert_eq!(validate_adopt("Rex", "", None, types).unwrap_err().message, "Please select a pet type.");
        assert_eq!(validate_adopt("Rex", "Dog", None, types).unwrap_err().message, "Missing user ID.");
        assert_eq!(validate_adopt("Rex", "Hamster", Some(1), types).unwrap_err().message, "Invalid pet type.");
        assert!(validate_adopt("Rex", "Dog", Some(1), types).is_ok());
    }

    #[test]
    fn test_delete_phrase_is_case_sensitive() {
        assert!(validate_delete_phrase("DELETE").is_ok());
        assert!(validate_delete_phrase("delete").is_err());
        assert!(validate_delete_phrase(" DELETE").is_err());
    }
}
