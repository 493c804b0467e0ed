//! Section header with a pulsing title and optional action slot.

use leptos::prelude::*;

pub const DEFAULT_TITLE: &str = "PIXEL PETS";
pub const DEFAULT_SUBTITLE: &str = "✨ Because every pixel deserves a little love. 🐾";

#[component]
pub fn Header(
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[prop(into, default = DEFAULT_SUBTITLE.to_string())] subtitle: String,
    /// `<h1>` when true, otherwise `<h2>` so the nav keeps the only h1
    #[prop(optional)] is_page_title: bool,
    #[prop(default = true)] show_paw: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let heading_text = format!("{}{}", if show_paw { "🐾 " } else { "" }, title);
    let heading = if is_page_title {
        view! { <h1 class="header-title pulse">{heading_text}</h1> }.into_any()
    } else {
        view! { <h2 class="header-title pulse">{heading_text}</h2> }.into_any()
    };

    view! {
        <header class="panel header-panel">
            <div class="panel__body u-stack-sm">
                {heading}
                {(!subtitle.is_empty()).then(|| view! { <p class="header-subtitle">{subtitle}</p> })}
                {children.map(|children| children())}
            </div>
        </header>
    }
}
