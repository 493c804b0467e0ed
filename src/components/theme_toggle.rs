//! Theme Toggle Component
//!
//! Floating button cycling through the color themes.

use leptos::prelude::*;

use crate::theme::{apply_theme, stored_theme, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(Theme::Default);

    // Restore once mounted
    Effect::new(move |_| {
        let saved = stored_theme();
        if saved != Theme::Default {
            apply_theme(saved);
            set_theme.set(saved);
        }
    });

    let cycle = move |_| {
        let next = theme.get_untracked().next();
        apply_theme(next);
        set_theme.set(next);
    };

    view! {
        <button
            type="button"
            class="toggle-btn"
            on:click=cycle
            aria-label=move || format!("Cycle color theme (current: {})", theme.get().label())
        >
            <span aria-hidden="true">{move || theme.get().icon()}</span>
            <span class="sr-only">"Change theme"</span>
        </button>
    }
}
