//! Route Pages

use leptos::prelude::{document, request_animation_frame};
use wasm_bindgen::JsCast;

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod pet_profile;
pub mod register;
pub mod settings;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use pet_profile::PetProfile;
pub use register::Register;
pub use settings::Settings;

/// Focus an element by id on the next frame, after any pending render
pub(crate) fn focus_by_id(id: &'static str) {
    request_animation_frame(move || {
        let element = document()
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            let _ = element.focus();
        }
    });
}

/// `history.back()`
pub(crate) fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}
