//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer" role="contentinfo">
            <p class="footer-tagline">"✨ “Because every pixel deserves a little love.” 🐾"</p>
            <p class="footer-credit">"Powered by caffeine, nostalgia, and a lot of tiny pixel pals."</p>
            <p class="footer-credit">
                "Built as a LaunchCode capstone by " <span class="footer-accent">"Sarah"</span>
                {format!(" · © {}", year)}
            </p>
        </footer>
    }
}
