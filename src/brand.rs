//! Brand Copy
//!
//! User-facing strings shared across pages.

pub const APP_NAME: &str = "Pixel Pets";

pub mod toasts {
    pub const WELCOME: &str = "Welcome back! 🐾";
    pub const ACCOUNT_CREATED: &str = "Account created! Welcome to Pixel Pets.";
    pub const PROFILE_PATCHED: &str = "Profile patched! 🩹";
    pub const PASSWORD_PATCHED: &str = "Password patched! 🔐🩹";
    pub const ACCOUNT_DELETED: &str = "Your account was deleted.";
    pub const FED: &str = "Nom nom! 🍖";
    pub const PLAYED: &str = "So much fun! 🎮";
    pub const RESTED: &str = "Zzz… 😴";
    pub const RELEASED: &str = "Pet released. 🐾";
    pub const FEED_ERROR: &str = "Could not feed your pet.";
    pub const PLAY_ERROR: &str = "Could not play with your pet.";
    pub const REST_ERROR: &str = "Could not rest your pet.";
    pub const RELEASE_ERROR: &str = "Could not release your pet.";
    pub const PET_LOAD_FAILED: &str = "Failed to load pet.";
    pub const PROFILE_LOAD_FAILED: &str = "Failed to load profile.";
    pub const PETS_LOAD_FAILED: &str = "Failed to load pets.";
    pub const KONAMI: &str = "Konami unlocked! 🕹️ Theme toggle + confetti!";

    pub fn adopted(name: &str, pet_type: &str) -> String {
        format!("Adopted {} the {}!", name, pet_type)
    }
}

pub mod empty_states {
    pub const PETS: &str = "No pets yet. Adopt your first pixel pal!";
}

pub mod hints {
    pub const DASHBOARD: &str = "Tip: keep stats green for happy pixels.";
    pub const NOT_FOUND: &str = "Double-check the link, or head back to your dashboard.";
}

pub mod statuses {
    pub const LOW_FOOD: &str = "Hungry! Needs a snack 🍖";
    pub const LOW_HAPPY: &str = "Bored! Time to play 🎮";
    pub const LOW_ENERGY: &str = "Sleepy… let them rest 😴";
}
