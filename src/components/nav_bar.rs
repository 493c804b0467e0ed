//! Navigation Bar Component
//!
//! Brand link, page title and the auth-dependent menu.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth;
use crate::components::header::{DEFAULT_SUBTITLE, DEFAULT_TITLE};
use crate::store::{store_clear, use_app_store};

/// Whether a nav link to `target` is active at `current`; `end` requires an exact match
pub fn is_active(current: &str, target: &str, end: bool) -> bool {
    if end || target == "/" {
        return current == target;
    }
    current == target || current.starts_with(&format!("{}/", target.trim_end_matches('/')))
}

#[component]
pub fn NavBar(
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[prop(into, default = DEFAULT_SUBTITLE.to_string())] subtitle: String,
) -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let store = use_app_store();

    // re-read storage on every route change
    let is_authed = move || {
        pathname.track();
        auth::is_logged_in()
    };
    let link_class = move |target: &'static str, end: bool| {
        move || {
            if is_active(&pathname.get(), target, end) {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        auth::clear_user_id();
        store_clear(&store);
        web_sys::console::log_1(&"[NAV] Logged out".into());
        navigate("/login", Default::default());
    };

    view! {
        <div class="container nav-row nav-grid">
            <a href="/" class="nav-brand nav-left">"🐾 Pixel Pets"</a>

            <div class="nav-center">
                {(!title.is_empty())
                    .then(|| view! { <h1 class="nav-header-title pulse">{format!("🐾 {}", title)}</h1> })}
                {(!subtitle.is_empty())
                    .then(|| view! { <p class="nav-header-subtitle">{subtitle}</p> })}
            </div>

            <Show
                when=is_authed
                fallback=move || {
                    view! {
                        <div class="nav-links nav-right">
                            <a href="/" class=link_class("/", true)>"Home"</a>
                            <a href="/login" class=link_class("/login", false)>"Log In"</a>
                            <a href="/register" class=link_class("/register", false)>"Register"</a>
                        </div>
                    }
                }
            >
                <div class="nav-links nav-right">
                    <a href="/" class=link_class("/", true)>"Home"</a>
                    <a href="/dashboard" class=link_class("/dashboard", false)>"Dashboard"</a>
                    <a href="/settings" class=link_class("/settings", false)>"Edit Profile"</a>
                    <button class="btn btn--ghost nav-logout" on:click=on_logout.clone()>"Logout"</button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_link_matches_exactly() {
        assert!(is_active("/", "/", true));
        assert!(!is_active("/dashboard", "/", true));
    }

    #[test]
    fn test_nested_paths_are_active() {
        assert!(is_active("/dashboard", "/dashboard", false));
        assert!(is_active("/settings/", "/settings", false));
        assert!(!is_active("/settingsx", "/settings", false));
        assert!(!is_active("/login", "/register", false));
    }
}
