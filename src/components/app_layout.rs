//! App Layout Component
//!
//! Page chrome shared by every route: theme toggle, nav header, footer and
//! the Konami easter egg.

use leptos::prelude::*;

use super::footer::Footer;
use super::header::{DEFAULT_SUBTITLE, DEFAULT_TITLE};
use super::nav_bar::NavBar;
use super::theme_toggle::ThemeToggle;
use crate::brand::toasts;
use crate::context::use_notice;
use crate::konami::use_konami;

#[component]
pub fn AppLayout(
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[prop(into, default = DEFAULT_SUBTITLE.to_string())] subtitle: String,
    children: Children,
) -> impl IntoView {
    let notice = use_notice();
    use_konami(move || {
        notice.success(toasts::KONAMI);
    });

    view! {
        <div class="toggle-container">
            <ThemeToggle />
        </div>
        <header>
            <NavBar title=title subtitle=subtitle />
        </header>
        <main class="container">{children()}</main>
        <footer>
            <Footer />
        </footer>
    }
}
