//! Route guard: renders its children only with a stored user id.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;

use crate::auth;

pub const LOGIN_PATH: &str = "/login";

/// Where a visitor without a session is sent; `None` lets the page render
pub fn guard_redirect(user_id: Option<i64>) -> Option<&'static str> {
    match user_id {
        Some(_) => None,
        None => Some(LOGIN_PATH),
    }
}

#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    match guard_redirect(auth::get_user_id()) {
        None => children().into_any(),
        Some(path) => {
            web_sys::console::log_1(&format!("[AUTH] No session, redirecting to {}", path).into());
            let options = NavigateOptions {
                replace: true,
                ..Default::default()
            };
            view! { <Redirect path=path options=options /> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::parse_user_id;

    #[test]
    fn test_session_renders_page() {
        assert_eq!(guard_redirect(Some(7)), None);
        assert_eq!(guard_redirect(parse_user_id("42")), None);
    }

    #[test]
    fn test_missing_session_goes_to_login() {
        assert_eq!(guard_redirect(None), Some("/login"));
    }

    #[test]
    fn test_unusable_stored_ids_go_to_login() {
        for raw in ["", "abc", "0", "-3", "1.5", "NaN", "Infinity"] {
            assert_eq!(guard_redirect(parse_user_id(raw)), Some("/login"), "stored {:?}", raw);
        }
    }
}
