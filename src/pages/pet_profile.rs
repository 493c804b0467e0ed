//! Pet Profile Page
//!
//! One pet's stats, mood and care actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::{self, ApiError};
use crate::brand::toasts;
use crate::components::{AppLayout, ConfirmDialog, LoadingCard, PetSprite, StatusBarPixel};
use crate::confetti;
use crate::context::use_notice;
use crate::lifecycle::use_mounted;
use crate::models::Pet;
use crate::mood::mood_for;
use crate::store::{store_remove_pet, store_update_pet, use_app_store};

const NOT_FOUND_TEXT: &str = "We couldn’t find that pet.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Care {
    Feed,
    Play,
    Rest,
}

impl Care {
    async fn send(self, pet_id: i64) -> Result<Pet, ApiError> {
        match self {
            Care::Feed => api::feed_pet(pet_id).await,
            Care::Play => api::play_with_pet(pet_id).await,
            Care::Rest => api::rest_pet(pet_id).await,
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            Care::Feed => toasts::FED,
            Care::Play => toasts::PLAYED,
            Care::Rest => toasts::RESTED,
        }
    }

    fn error_text(self) -> &'static str {
        match self {
            Care::Feed => toasts::FEED_ERROR,
            Care::Play => toasts::PLAY_ERROR,
            Care::Rest => toasts::REST_ERROR,
        }
    }
}

#[component]
pub fn PetProfile() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let notice = use_notice();
    let store = use_app_store();
    let mounted = use_mounted();

    let pet = RwSignal::new(None::<Pet>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (confirm_open, set_confirm_open) = signal(false);

    let pet_id = Memo::new(move |_| {
        params
            .read()
            .get("pet_id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let load_mounted = mounted.clone();
    Effect::new(move |_| {
        let Some(id) = pet_id.get() else {
            set_error.set(NOT_FOUND_TEXT.to_string());
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        let mounted = load_mounted.clone();
        spawn_local(async move {
            let result = api::get_pet(id).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(loaded) => {
                    set_error.set(String::new());
                    pet.set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PET] Load {} failed: {}", id, e).into());
                    set_error.set(if e.message.is_empty() { NOT_FOUND_TEXT.to_string() } else { e.message });
                    notice.error(toasts::PET_LOAD_FAILED);
                }
            }
            set_loading.set(false);
        });
    });

    let care_mounted = mounted.clone();
    let care = Callback::new(move |action: Care| {
        let Some(id) = pet_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let mounted = care_mounted.clone();
        spawn_local(async move {
            let result = action.send(id).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(updated) => {
                    notice.success(action.success_text());
                    if action == Care::Play {
                        confetti::burst();
                    }
                    store_update_pet(&store, updated.clone());
                    pet.set(Some(updated));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PET] {:?} failed: {}", action, e).into());
                    notice.error(action.error_text());
                }
            }
            set_busy.set(false);
        });
    });

    let release = Callback::new(move |_: ()| {
        set_confirm_open.set(false);
        let Some(id) = pet_id.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let mounted = mounted.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::delete_pet(id).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(()) => {
                    store_remove_pet(&store, id);
                    notice.success(toasts::RELEASED);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PET] Release {} failed: {}", id, e).into());
                    notice.error(toasts::RELEASE_ERROR);
                    set_busy.set(false);
                }
            }
        });
    });

    let has_pet = Memo::new(move |_| pet.with(Option::is_some));
    let text = move |f: fn(&Pet) -> String| {
        Signal::derive(move || pet.with(|p| p.as_ref().map(f).unwrap_or_default()))
    };
    let stat = move |f: fn(&Pet) -> i64| {
        Signal::derive(move || pet.with(|p| p.as_ref().map(f).unwrap_or_default()) as f64)
    };

    let pet_type = text(|p| p.pet_type.clone());
    let full_name = text(|p| format!("{} the {}", p.name, p.pet_type));
    let dialog_title = text(|p| format!("Release {}?", p.name));
    let mood = move || pet.with(|p| p.as_ref().map(mood_for).unwrap_or_default());

    view! {
        <AppLayout title="PET PROFILE">
            {move || {
                if loading.get() {
                    return view! { <LoadingCard title="Loading your pet…" /> }.into_any();
                }
                if !error.get().is_empty() || !has_pet.get() {
                    return view! {
                        <section class="panel panel--wide panel--center">
                            <header class="panel__header">
                                <h2 class="panel__title">"Not Found"</h2>
                            </header>
                            <div class="panel__body u-stack-md">
                                <p>
                                    {move || {
                                        let message = error.get();
                                        if message.is_empty() { NOT_FOUND_TEXT.to_string() } else { message }
                                    }}
                                </p>
                                <a href="/dashboard" class="btn btn--ghost">"← Back to Dashboard"</a>
                            </div>
                        </section>
                    }
                    .into_any();
                }

                view! {
                    <section class="panel panel--wide panel--center">
                        <header class="panel__header">
                            <h1 class="panel__title">{move || full_name.get()}</h1>
                        </header>
                        <div class="panel__body u-stack-lg">
                            <Show when=move || !mood().is_empty()>
                                <div class="notice notice--warn" role="status" aria-live="polite">
                                    <div class="notice__row">
                                        <div class="notice__icon" aria-hidden="true">"🧪"</div>
                                        <div class="notice__body">
                                            <strong>"Pet Status:"</strong>
                                            " "
                                            {move || mood().join(" · ")}
                                        </div>
                                    </div>
                                </div>
                            </Show>

                            <div class="u-center">
                                <PetSprite
                                    pet_type=pet_type
                                    class="pet-sprite--lg pet-sprite--hover-bounce"
                                    title=full_name.get_untracked()
                                />
                            </div>

                            <div class="u-stack-md">
                                <StatusBarPixel label="Fullness" kind="fullness" value=stat(|p| p.fullness) />
                                <StatusBarPixel label="Happiness" kind="happiness" value=stat(|p| p.happiness) />
                                <StatusBarPixel label="Energy" kind="energy" value=stat(|p| p.energy) />
                            </div>

                            <div class="u-actions-row">
                                <button class="btn" on:click=move |_| care.run(Care::Feed) disabled=move || busy.get()>
                                    "Feed 🍖"
                                </button>
                                <button
                                    class="btn btn--secondary"
                                    on:click=move |_| care.run(Care::Play)
                                    disabled=move || busy.get()
                                >
                                    "Play 🎮"
                                </button>
                                <button
                                    class="btn btn--ghost"
                                    on:click=move |_| care.run(Care::Rest)
                                    disabled=move || busy.get()
                                >
                                    "Rest 😴"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| set_confirm_open.set(true)
                                    disabled=move || busy.get()
                                >
                                    "Delete ❌"
                                </button>
                            </div>

                            <ConfirmDialog
                                open=confirm_open
                                title=dialog_title
                                confirm_label="Delete"
                                danger=true
                                on_confirm=release
                                on_cancel=move |_| set_confirm_open.set(false)
                            />

                            <div class="u-text-center">
                                <a href="/dashboard" class="btn btn--ghost">"← Back to Dashboard"</a>
                            </div>
                        </div>
                    </section>
                }
                .into_any()
            }}
        </AppLayout>
    }
}
