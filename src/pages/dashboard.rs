//! Dashboard Page
//!
//! Profile greeting, adopt form and the grid of the user's pets.

use futures_util::future::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::focus_by_id;

use crate::api;
use crate::auth;
use crate::brand::{empty_states, hints, toasts};
use crate::components::{AdoptForm, AppLayout, LoadingCard, PetSprite, StatusBarPixel};
use crate::confetti;
use crate::context::use_notice;
use crate::lifecycle::use_mounted;
use crate::models::Pet;
use crate::store::{
    store_add_pet, store_clear, store_pet_count, store_pets, store_profile, store_set_pets,
    store_set_profile, use_app_store,
};

pub fn pet_count_text(count: usize) -> String {
    match count {
        0 => "You do not have any pets yet — adopt your first friend!".to_string(),
        1 => "You have 1 pet.".to_string(),
        n => format!("You have {} pets.", n),
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let notice = use_notice();
    let store = use_app_store();
    let navigate = use_navigate();
    let mounted = use_mounted();
    let user_id = auth::get_user_id();
    let (loading, set_loading) = signal(true);

    let nav = navigate.clone();
    Effect::new(move |_| {
        let Some(user_id) = user_id else {
            nav("/login", Default::default());
            return;
        };
        let mounted = mounted.clone();
        spawn_local(async move {
            let (profile, pets) = join(api::get_user(user_id), api::get_user_pets(user_id)).await;
            if !mounted.get() {
                return;
            }

            match profile {
                Ok(user) => store_set_profile(&store, Some(user)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] Profile load failed: {}", e).into());
                    notice.error(if e.message.is_empty() { toasts::PROFILE_LOAD_FAILED.to_string() } else { e.message });
                }
            }
            match pets {
                Ok(pets) => {
                    web_sys::console::log_1(&format!("[DASHBOARD] Loaded {} pets", pets.len()).into());
                    store_set_pets(&store, pets);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[DASHBOARD] Pets load failed: {}", e).into());
                    notice.error(if e.message.is_empty() { toasts::PETS_LOAD_FAILED.to_string() } else { e.message });
                    store_set_pets(&store, Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let on_logout = move |_| {
        auth::clear_user_id();
        store_clear(&store);
        navigate("/login", Default::default());
    };

    let on_adopt = move |pet: Pet| {
        let message = toasts::adopted(&pet.name, &pet.pet_type);
        if store_add_pet(&store, pet) {
            confetti::burst();
        }
        notice.success(message);
    };

    let pet_count = move || store_pet_count(&store);

    view! {
        <AppLayout title="DASHBOARD">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingCard title="Loading your pets…" /> }
            >
                <section class="panel panel--full">
                    <header class="panel__header">
                        <h1 class="panel__title">
                            {move || match store_profile(&store) {
                                Some(user) => format!("Welcome, {}!", user.username),
                                None => "Your Pet Dashboard".to_string(),
                            }}
                        </h1>
                    </header>
                    <div class="panel__body u-stack-md">
                        <p>{move || pet_count_text(pet_count())}</p>
                        <div class="u-stack-sm" style="display: inline-grid;">
                            <a href="/settings" class="btn">"Edit Profile"</a>
                            <button class="btn btn--ghost" on:click=on_logout.clone()>"Logout"</button>
                        </div>
                    </div>
                </section>

                <section class="panel panel--full">
                    <header class="panel__header">
                        <h2 class="panel__title">"Adopt a New Friend"</h2>
                    </header>
                    <div class="panel__body">
                        <AdoptForm user_id=user_id on_adopt=on_adopt />
                    </div>
                </section>

                <section class="panel panel--full">
                    <header class="panel__header">
                        <h2 class="panel__title">"Your Pets"</h2>
                    </header>
                    <div class="panel__body">
                        <Show
                            when=move || { pet_count() > 0 }
                            fallback=|| {
                                view! {
                                    <section class="panel panel--narrow u-stack-md">
                                        <p>{format!("🧸 {}", empty_states::PETS)}</p>
                                        <button class="btn btn--secondary" on:click=|_| focus_by_id("adopt-name")>
                                            "Adopt your first friend"
                                        </button>
                                        <p class="notfound__hint">{hints::DASHBOARD}</p>
                                    </section>
                                }
                            }
                        >
                            <div class="grid grid-3">
                                <For
                                    each=move || store_pets(&store)
                                    key=|pet| pet.id
                                    children=|pet| view! { <PetCard pet=pet /> }
                                />
                            </div>
                        </Show>
                    </div>
                </section>
            </Show>
        </AppLayout>
    }
}

#[component]
fn PetCard(pet: Pet) -> impl IntoView {
    let href = format!("/pets/{}", pet.id);
    let label = format!("{} the {}", pet.name, pet.pet_type);

    view! {
        <article class="panel">
            <div class="panel__body u-stack-md">
                <a href=href.clone() title=label.clone()>
                    <PetSprite pet_type=pet.pet_type.clone() size=120 title=label.clone() />
                </a>
                <div class="u-stack-sm">
                    <h3>{pet.name.clone()}</h3>
                    <StatusBarPixel label="Fullness" kind="fullness" value=pet.fullness as f64 show_percent=false compact=true />
                    <StatusBarPixel label="Happiness" kind="happiness" value=pet.happiness as f64 show_percent=false compact=true />
                    <StatusBarPixel label="Energy" kind="energy" value=pet.energy as f64 show_percent=false compact=true />
                </div>
                <div class="u-actions-row">
                    <a href=href class="btn btn--secondary" title=label>"View Profile"</a>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_count_text() {
        assert_eq!(pet_count_text(0), "You do not have any pets yet — adopt your first friend!");
        assert_eq!(pet_count_text(1), "You have 1 pet.");
        assert_eq!(pet_count_text(3), "You have 3 pets.");
    }
}
