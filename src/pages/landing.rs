//! Landing Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::components::{AppLayout, PetSprite, StatusBarPixel};
use crate::lifecycle::use_mounted;
use crate::models::User;

#[component]
pub fn Landing() -> impl IntoView {
    let user_id = auth::get_user_id();
    let profile = RwSignal::new(None::<User>);
    let (profile_loading, set_profile_loading) = signal(false);
    let mounted = use_mounted();

    Effect::new(move |_| {
        let Some(user_id) = user_id else {
            return;
        };
        set_profile_loading.set(true);
        let mounted = mounted.clone();
        spawn_local(async move {
            let result = api::get_user(user_id).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(user) => profile.set(Some(user)),
                Err(e) => web_sys::console::warn_1(&format!("[LANDING] No profile: {}", e).into()),
            }
            set_profile_loading.set(false);
        });
    });

    let logged_in = move || profile.with(Option::is_some);
    let username = move || profile.with(|p| p.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    view! {
        <AppLayout>
            <section class="panel panel--wide">
                <div class="panel__body u-stack-md u-center" style="flex-direction: column;">
                    <PetSprite pet_type="Dragon".to_string() size=240 title="Pixel Pet Preview" />

                    <div class="demo-bars u-stack-sm" aria-hidden="true">
                        <StatusBarPixel label="Fullness" value=86.0 kind="fullness" />
                        <StatusBarPixel label="Happiness" value=72.0 kind="happiness" />
                        <StatusBarPixel label="Energy" value=63.0 kind="energy" />
                    </div>

                    <Show
                        when=logged_in
                        fallback=|| {
                            view! {
                                <p class="u-text-center">
                                    "Adopt your own retro pixel pet and keep their stats happy."
                                </p>
                                <p class="u-text-center">
                                    "Feed, play, and rest your way to a cozy little pixel menagerie."
                                </p>
                                <div class="u-actions-row">
                                    <a href="/login" class="btn">"▶ START / LOG IN"</a>
                                    <a href="/register" class="btn btn--secondary">"★ NEW GAME / REGISTER"</a>
                                </div>
                            }
                        }
                    >
                        <p class="u-text-center">
                            "Welcome back, " <strong>{username}</strong> "!"
                        </p>
                        <p class="u-text-center">
                            "Your pixel pals are waiting on your dashboard. Keep their stats happy with feed, play, and rest."
                        </p>
                        <div class="u-actions-row">
                            <a href="/dashboard" class="btn" aria-disabled=move || profile_loading.get().to_string()>
                                "▶ Go to Dashboard"
                            </a>
                            <a href="/settings" class="btn btn--secondary">"⚙ Edit Profile"</a>
                        </div>
                    </Show>
                </div>
            </section>

            <section class="panel panel--wide">
                <header class="panel__header">
                    <h2 class="panel__title">"Features"</h2>
                </header>
                <div class="panel__body">
                    <ul class="feature-list">
                        <li>"🕹️ Retro 8-bit UI with crunchy pixels"</li>
                        <li>"🍖 Feed · 🎾 Play · 💤 Rest to boost stats"</li>
                        <li>"📈 Level up and keep your pets happy"</li>
                        <li>"💾 Real backend (Rust + SQLite)"</li>
                    </ul>
                </div>
            </section>
        </AppLayout>
    }
}
