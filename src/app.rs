//! Pixel Pets Frontend App
//!
//! Router, route guards and the app-wide providers.

use leptos::error::Errors;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{AppLayout, NoticeProvider, RequireAuth};
use crate::pages::{go_back, Dashboard, Landing, Login, NotFound, PetProfile, Register, Settings};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Global store shared by the pages
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <NoticeProvider>
                <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors /> }>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Landing />
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/register") view=Register />
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <RequireAuth><Dashboard /></RequireAuth> }
                        />
                        <Route
                            path=path!("/settings")
                            view=|| view! { <RequireAuth><Settings /></RequireAuth> }
                        />
                        <Route
                            path=path!("/pets/:pet_id")
                            view=|| view! { <RequireAuth><PetProfile /></RequireAuth> }
                        />
                    </Routes>
                </ErrorBoundary>
            </NoticeProvider>
        </Router>
    }
}

/// Shown when a view below the boundary renders an error
#[component]
fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let count = errors.read().iter().count();
    web_sys::console::error_1(&format!("[APP] Render failed with {} error(s)", count).into());

    let reset = move |_| errors.set(Errors::default());
    let reload = |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <AppLayout title="WHOOPS!">
            <section class="panel panel--narrow" role="alert">
                <header class="panel__header">
                    <h2 class="panel__title">"Something went wrong"</h2>
                </header>
                <div class="panel__body u-stack-md">
                    <p>"Our pixels tripped over a wire. Try one of these:"</p>
                    <div class="u-actions-row">
                        <button type="button" class="btn" on:click=reset>"Try again"</button>
                        <button type="button" class="btn btn--secondary" on:click=|_| go_back()>
                            "⤺ Go Back"
                        </button>
                        <button type="button" class="btn btn--ghost" on:click=reload>"Reload Page"</button>
                    </div>
                </div>
            </section>
        </AppLayout>
    }
}
