//! Signed-in user's profile and pets, shared across pages.
//!
//! Field accessors generated by `#[derive(Store)]` are only used here; pages
//! go through the `store_*` helpers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Pet, User};

/// Signed-in user's profile and pets
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Profile of the stored user id, once loaded
    pub profile: Option<User>,
    /// Pets owned by that user
    pub pets: Vec<Pet>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_profile(store: &AppStore) -> Option<User> {
    store.profile().get()
}

pub fn store_set_profile(store: &AppStore, user: Option<User>) {
    store.profile().set(user);
}

pub fn store_pets(store: &AppStore) -> Vec<Pet> {
    store.pets().get()
}

pub fn store_pet_count(store: &AppStore) -> usize {
    store.pets().read().len()
}

pub fn store_set_pets(store: &AppStore, pets: Vec<Pet>) {
    store.pets().set(pets);
}

/// Add a pet; returns true when it was the first one
pub fn store_add_pet(store: &AppStore, pet: Pet) -> bool {
    let field = store.pets();
    let mut pets = field.write();
    pets.push(pet);
    pets.len() == 1
}

/// Replace a pet in the store by ID
pub fn store_update_pet(store: &AppStore, updated: Pet) {
    if let Some(pet) = store.pets().write().iter_mut().find(|p| p.id == updated.id) {
        *pet = updated;
    }
}

/// Remove a pet from the store by ID
pub fn store_remove_pet(store: &AppStore, pet_id: i64) {
    store.pets().write().retain(|p| p.id != pet_id);
}

/// Forget everything about the signed-in user
pub fn store_clear(store: &AppStore) {
    store.profile().set(None);
    store.pets().write().clear();
}
