//! Loading Card Component
//!
//! Placeholder panel shown while a page fetches its data.

use leptos::prelude::*;

#[component]
pub fn LoadingCard(#[prop(into, default = "Loading…".to_string())] title: String) -> impl IntoView {
    view! {
        <section class="panel panel--narrow" aria-busy="true">
            <header class="panel__header">
                <h2 class="panel__title">{title}</h2>
            </header>
            <div class="panel__body u-stack-md">
                <p class="crt-scanline blink">"LOADING… PLEASE WAIT 🐾"</p>
                <div aria-hidden="true" class="loading-bars">
                    <div></div>
                    <div></div>
                    <div></div>
                </div>
            </div>
        </section>
    }
}
