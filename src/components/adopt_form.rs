//! Adopt Form Component
//!
//! Name + type form that adopts a pet for the signed-in user.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::lifecycle::use_mounted;
use crate::models::Pet;
use crate::validation::{validate_adopt, ALLOWED_PET_TYPES};

const ADOPT_FAILED: &str = "Adoption failed.";

/// Validated request, ready to send
#[derive(Clone, Debug, PartialEq)]
pub struct AdoptRequest {
    pub name: String,
    pub pet_type: String,
    pub owner: i64,
}

/// Field values and the inline error of the form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdoptDraft {
    pub name: String,
    pub pet_type: String,
    pub error: String,
}

impl AdoptDraft {
    /// Validate the fields; on failure the error is set and nothing is sent
    pub fn prepare(&mut self, user_id: Option<i64>, allowed: &[&str]) -> Option<AdoptRequest> {
        self.error.clear();
        let name = self.name.trim().to_string();
        if let Err(err) = validate_adopt(&name, &self.pet_type, user_id, allowed) {
            self.error = err.message.to_string();
            return None;
        }
        Some(AdoptRequest {
            name,
            pet_type: self.pet_type.clone(),
            owner: user_id?,
        })
    }

    /// Apply the server's answer. A saved pet clears the form and is returned
    /// for `on_adopt`; a failure keeps the fields and shows the message.
    pub fn finish(&mut self, result: Result<Pet, ApiError>) -> Option<Pet> {
        match result {
            Ok(pet) => {
                *self = Self::default();
                Some(pet)
            }
            Err(e) => {
                self.error = if e.message.trim().is_empty() {
                    ADOPT_FAILED.to_string()
                } else {
                    e.message
                };
                None
            }
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

#[component]
pub fn AdoptForm(
    user_id: Option<i64>,
    /// Called with the saved pet after a successful adoption
    #[prop(into)] on_adopt: Callback<Pet>,
    #[prop(optional)] pet_types: Option<Vec<&'static str>>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let options = pet_types
        .filter(|types| !types.is_empty())
        .unwrap_or_else(|| ALLOWED_PET_TYPES.to_vec());
    let allowed = options.clone();

    let draft = RwSignal::new(AdoptDraft::default());
    let (busy, set_busy) = signal(false);
    let error_ref = NodeRef::<html::Div>::new();
    let mounted = use_mounted();

    let focus_error = move || {
        request_animation_frame(move || {
            if let Some(el) = error_ref.get_untracked() {
                let _ = el.focus();
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let Some(request) = draft
            .try_update(|d| d.prepare(user_id, &allowed))
            .flatten()
        else {
            focus_error();
            return;
        };

        set_busy.set(true);
        let mounted = mounted.clone();
        spawn_local(async move {
            let result = api::adopt_pet(&request.name, &request.pet_type, request.owner).await;
            if !mounted.get() {
                return;
            }
            match draft.try_update(|d| d.finish(result)).flatten() {
                Some(pet) => {
                    web_sys::console::log_1(&format!("[ADOPT] Adopted pet {}", pet.id).into());
                    on_adopt.run(pet);
                }
                None => focus_error(),
            }
            set_busy.set(false);
        });
    };

    let has_error = move || draft.with(AdoptDraft::has_error);
    let name_invalid = move || draft.with(|d| d.has_error() && d.name.trim().is_empty());
    let type_invalid = move || draft.with(|d| d.has_error() && d.pet_type.is_empty());

    view! {
        <section class=format!("panel {}", class)>
            <div class="panel__body">
                <form class="form" on:submit=on_submit novalidate>
                    <div class="form__row">
                        <label class="label" for="adopt-name">"Pet name"</label>
                        <input
                            id="adopt-name"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.name = value);
                            }
                            required
                            minlength="2"
                            maxlength="50"
                            aria-required="true"
                            aria-invalid=move || name_invalid().to_string()
                            aria-describedby=move || name_invalid().then_some("adopt-error")
                            disabled=move || busy.get()
                            placeholder="Pixel Paws"
                        />
                    </div>

                    <div class="form__row">
                        <label class="label" for="adopt-type">"Pet type"</label>
                        <select
                            id="adopt-type"
                            prop:value=move || draft.with(|d| d.pet_type.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.pet_type = value);
                            }
                            required
                            aria-required="true"
                            aria-invalid=move || type_invalid().to_string()
                            aria-describedby=move || type_invalid().then_some("adopt-error")
                            disabled=move || busy.get()
                        >
                            <option value="">"Select a pet type"</option>
                            {options
                                .into_iter()
                                .map(|t| view! { <option value=t>{t}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <Show when=has_error>
                        <div
                            id="adopt-error"
                            class="form-error"
                            role="alert"
                            aria-live="assertive"
                            tabindex="-1"
                            node_ref=error_ref
                        >
                            {move || draft.with(|d| d.error.clone())}
                        </div>
                    </Show>

                    <div class="form__row u-text-center">
                        <button class="btn" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Adopting..." } else { "Adopt 🐾" }}
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, pet_type: &str) -> AdoptDraft {
        AdoptDraft {
            name: name.to_string(),
            pet_type: pet_type.to_string(),
            error: String::new(),
        }
    }

    fn saved_pet() -> Pet {
        Pet {
            id: 9,
            name: "Mochi".into(),
            pet_type: "Cat".into(),
            level: 1,
            fullness: 100,
            happiness: 100,
            energy: 100,
            user_id: Some(3),
            created_at: None,
        }
    }

    #[test]
    fn test_prepare_trims_and_sends() {
        let mut draft = filled("  Mochi ", "Cat");
        let request = draft.prepare(Some(3), &ALLOWED_PET_TYPES).unwrap();
        assert_eq!(
            request,
            AdoptRequest {
                name: "Mochi".into(),
                pet_type: "Cat".into(),
                owner: 3,
            }
        );
        assert!(!draft.has_error());
    }

    #[test]
    fn test_prepare_rejects_before_sending() {
        let mut draft = filled("   ", "Cat");
        assert!(draft.prepare(Some(3), &ALLOWED_PET_TYPES).is_none());
        assert_eq!(draft.error, "Please enter a pet name.");

        let mut draft = filled("Mochi", "");
        assert!(draft.prepare(Some(3), &ALLOWED_PET_TYPES).is_none());
        assert_eq!(draft.error, "Please select a pet type.");

        let mut draft = filled("Mochi", "Cat");
        assert!(draft.prepare(None, &ALLOWED_PET_TYPES).is_none());
        assert_eq!(draft.error, "Missing user ID.");

        let mut draft = filled("Mochi", "Hamster");
        assert!(draft.prepare(Some(3), &ALLOWED_PET_TYPES).is_none());
        assert_eq!(draft.error, "Invalid pet type.");
    }

    #[test]
    fn test_success_clears_form_and_hands_over_pet() {
        let mut draft = filled("Mochi", "Cat");
        let adopted = draft.finish(Ok(saved_pet()));
        assert_eq!(adopted, Some(saved_pet()));
        assert_eq!(draft, AdoptDraft::default());
    }

    #[test]
    fn test_failure_shows_server_message_and_keeps_fields() {
        let mut draft = filled("Mochi", "Cat");
        let err = ApiError {
            status: 404,
            message: "User not found: 3".into(),
        };
        assert!(draft.finish(Err(err)).is_none());
        assert_eq!(draft.error, "User not found: 3");
        assert_eq!(draft.name, "Mochi");
        assert_eq!(draft.pet_type, "Cat");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut draft = filled("Mochi", "Cat");
        let err = ApiError {
            status: 500,
            message: String::new(),
        };
        assert!(draft.finish(Err(err)).is_none());
        assert_eq!(draft.error, "Adoption failed.");
    }

    #[test]
    fn test_new_submit_clears_previous_error() {
        let mut draft = filled("Mochi", "Cat");
        draft.error = "Adoption failed.".into();
        assert!(draft.prepare(Some(3), &ALLOWED_PET_TYPES).is_some());
        assert!(!draft.has_error());
    }
}
