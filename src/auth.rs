//! Session Storage
//!
//! The logged-in user's id lives in `localStorage` under `userId`.

const USER_ID_KEY: &str = "userId";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Accepts only positive whole numbers
pub fn parse_user_id(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Stored user id, if a valid one is present
pub fn get_user_id() -> Option<i64> {
    let raw = storage()?.get_item(USER_ID_KEY).ok().flatten()?;
    parse_user_id(&raw)
}

pub fn set_user_id(user_id: i64) {
    if let Some(storage) = storage() {
        if storage.set_item(USER_ID_KEY, &user_id.to_string()).is_err() {
            web_sys::console::warn_1(&"[AUTH] Could not persist user id".into());
        }
    }
}

pub fn clear_user_id() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(USER_ID_KEY);
    }
}

pub fn is_logged_in() -> bool {
    get_user_id().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positive_integers() {
        assert_eq!(parse_user_id("42"), Some(42));
        assert_eq!(parse_user_id(" 7 "), Some(7));
        assert_eq!(parse_user_id("3.0"), Some(3));
    }

    #[test]
    fn test_rejects_invalid_ids() {
        for raw in ["", "0", "-4", "1.5", "abc", "NaN", "Infinity", "null", "undefined"] {
            assert_eq!(parse_user_id(raw), None, "{raw:?} should be rejected");
        }
    }
}
