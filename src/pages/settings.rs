//! Settings Page
//!
//! Edit username/email, change the password or delete the account.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::focus_by_id;
use crate::api;
use crate::auth;
use crate::brand::toasts;
use crate::components::{AppLayout, ConfirmAction};
use crate::context::use_notice;
use crate::lifecycle::use_mounted;
use crate::models::UserUpdate;
use crate::store::{store_clear, store_set_profile, use_app_store};
use crate::validation::{
    validate_delete_phrase, validate_new_password, validate_profile, Field, DELETE_PHRASE,
};

fn or_fallback(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    let navigate = use_navigate();
    let notice = use_notice();
    let store = use_app_store();
    let mounted = use_mounted();
    let user_id = auth::get_user_id();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (header_name, set_header_name) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(String::new());

    let (confirm_delete, set_confirm_delete) = signal(false);
    let (confirm_text, set_confirm_text) = signal(String::new());
    let (delete_error, set_delete_error) = signal(String::new());

    // Inline error + toast, then move focus
    let fail = move |message: String, focus: &'static str| {
        notice.error(&message);
        set_error_msg.set(message);
        focus_by_id(focus);
    };

    let load_mounted = mounted.clone();
    let nav = navigate.clone();
    Effect::new(move |_| {
        let Some(user_id) = user_id else {
            nav("/login", Default::default());
            return;
        };
        let mounted = load_mounted.clone();
        spawn_local(async move {
            let result = api::get_user(user_id).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(user) => {
                    set_username.set(user.username.clone());
                    set_email.set(user.email.clone());
                    set_header_name.set(user.username.clone());
                    store_set_profile(&store, Some(user));
                    focus_by_id("set-username");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[SETTINGS] Profile load failed: {}", e).into());
                    fail(or_fallback(e.message, toasts::PROFILE_LOAD_FAILED), "settings-error");
                }
            }
        });
    });

    let profile_mounted = mounted.clone();
    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let Some(user_id) = user_id else {
            return;
        };
        set_error_msg.set(String::new());

        let name = username.get_untracked().trim().to_string();
        let address = email.get_untracked().trim().to_string();
        if let Err(err) = validate_profile(&name, &address) {
            let target = if err.field == Field::Email { "set-email" } else { "set-username" };
            fail(err.message.to_string(), target);
            return;
        }

        set_loading.set(true);
        let mounted = profile_mounted.clone();
        spawn_local(async move {
            let update = UserUpdate {
                username: Some(name),
                email: Some(address),
                ..Default::default()
            };
            let result = api::update_user(user_id, &update).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(user) => {
                    set_username.set(user.username.clone());
                    set_email.set(user.email.clone());
                    set_header_name.set(user.username.clone());
                    store_set_profile(&store, Some(user));
                    notice.success(toasts::PROFILE_PATCHED);
                }
                Err(e) => fail(or_fallback(e.message, "Profile update failed."), "set-username"),
            }
            set_loading.set(false);
        });
    };

    let password_mounted = mounted.clone();
    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let Some(user_id) = user_id else {
            return;
        };
        set_error_msg.set(String::new());

        let next = password.get_untracked();
        if let Err(err) = validate_new_password(&next) {
            fail(err.message.to_string(), "set-password");
            return;
        }

        set_loading.set(true);
        let mounted = password_mounted.clone();
        spawn_local(async move {
            let update = UserUpdate {
                password: Some(next),
                ..Default::default()
            };
            let result = api::update_user(user_id, &update).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(_) => {
                    set_password.set(String::new());
                    notice.success(toasts::PASSWORD_PATCHED);
                }
                Err(e) => fail(or_fallback(e.message, "Password change failed."), "set-password"),
            }
            set_loading.set(false);
        });
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            auth::clear_user_id();
            store_clear(&store);
            navigate("/login", Default::default());
        }
    };

    let on_delete_confirmed = Callback::new(move |_: ()| {
        if loading.get_untracked() {
            return;
        }
        let Some(user_id) = user_id else {
            return;
        };
        if let Err(err) = validate_delete_phrase(&confirm_text.get_untracked()) {
            set_delete_error.set(err.message.to_string());
            notice.error(err.message);
            focus_by_id("delete-confirm");
            return;
        }

        set_error_msg.set(String::new());
        set_delete_error.set(String::new());
        set_loading.set(true);
        let mounted = mounted.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::delete_user(user_id).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[SETTINGS] Deleted user {}", user_id).into());
                    notice.success(toasts::ACCOUNT_DELETED);
                    auth::clear_user_id();
                    store_clear(&store);
                    set_loading.set(false);
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    fail(or_fallback(e.message, "Account deletion failed."), "delete-confirm");
                    set_loading.set(false);
                }
            }
        });
    });

    let open_delete = move |_| {
        set_confirm_delete.set(true);
        set_delete_error.set(String::new());
        set_confirm_text.set(String::new());
        focus_by_id("delete-confirm");
    };
    let cancel_delete = move |_: ()| {
        set_confirm_delete.set(false);
        set_confirm_text.set(String::new());
        set_delete_error.set(String::new());
    };

    view! {
        <AppLayout title="PROFILE SETTINGS">
            <section class="panel">
                <header class="panel__header">
                    <h1 class="panel__title">
                        {move || {
                            let name = header_name.get();
                            if name.is_empty() { "Profile Settings".to_string() } else { format!("{}'s Profile", name) }
                        }}
                    </h1>
                </header>
                <div class="panel__body">
                    <div class="u-actions-row">
                        <a href="/dashboard" class="btn btn--ghost">"← Dashboard"</a>
                        <button type="button" class="btn" on:click=on_logout disabled=move || loading.get()>
                            "Logout"
                        </button>
                    </div>
                    <Show when=move || !error_msg.get().is_empty()>
                        <div id="settings-error" class="form-error" role="alert" aria-live="assertive" tabindex="-1">
                            {move || error_msg.get()}
                        </div>
                    </Show>
                </div>
            </section>

            <section class="panel">
                <header class="panel__header">
                    <h2 class="panel__title">"Update Profile"</h2>
                </header>
                <div class="panel__body">
                    <form class="form" on:submit=on_profile_submit novalidate>
                        <div class="form__row">
                            <label class="label" for="set-username">"Username"</label>
                            <input
                                id="set-username"
                                name="username"
                                type="text"
                                placeholder="username"
                                prop:value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                disabled=move || loading.get()
                                required
                                aria-required="true"
                            />
                        </div>
                        <div class="form__row">
                            <label class="label" for="set-email">"Email"</label>
                            <input
                                id="set-email"
                                name="email"
                                type="email"
                                placeholder="email@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                disabled=move || loading.get()
                                required
                                aria-required="true"
                            />
                        </div>
                        <div class="form__row u-text-center">
                            <button class="btn" type="submit" disabled=move || loading.get()>
                                {move || if loading.get() { "Updating..." } else { "Update Profile" }}
                            </button>
                        </div>
                    </form>
                </div>
            </section>

            <section class="panel">
                <header class="panel__header">
                    <h2 class="panel__title">"Change Password"</h2>
                </header>
                <div class="panel__body">
                    <form class="form" on:submit=on_password_submit novalidate>
                        <div class="form__row">
                            <label class="label" for="set-password">"New password"</label>
                            <input
                                id="set-password"
                                name="password"
                                type="password"
                                placeholder="minimum 8 characters"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || loading.get()
                                required
                                aria-required="true"
                            />
                        </div>
                        <div class="form__row u-text-center">
                            <button class="btn" type="submit" disabled=move || loading.get()>
                                {move || if loading.get() { "Changing..." } else { "Change Password" }}
                            </button>
                        </div>
                    </form>
                </div>
            </section>

            <section class="panel">
                <header class="panel__header">
                    <h2 class="panel__title">"Delete Account"</h2>
                </header>
                <div class="panel__body u-stack-md">
                    <p>"Deleting your account will permanently remove your user and all pets."</p>
                    <Show
                        when=move || confirm_delete.get()
                        fallback=move || {
                            view! {
                                <div class="u-actions-row">
                                    <button
                                        type="button"
                                        class="btn btn--danger"
                                        on:click=open_delete
                                        disabled=move || loading.get()
                                    >
                                        "Delete Account"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="u-stack-sm">
                            <p>"Type " <strong>{DELETE_PHRASE}</strong> " to confirm."</p>
                            <input
                                id="delete-confirm"
                                placeholder=DELETE_PHRASE
                                prop:value=move || confirm_text.get()
                                on:input=move |ev| {
                                    set_confirm_text.set(event_target_value(&ev));
                                    set_delete_error.set(String::new());
                                }
                                disabled=move || loading.get()
                                aria-label="Type DELETE to confirm account deletion"
                                aria-invalid=move || (!delete_error.get().is_empty()).to_string()
                                aria-describedby=move || {
                                    (!delete_error.get().is_empty()).then_some("delete-confirm-error")
                                }
                            />
                            <Show when=move || !delete_error.get().is_empty()>
                                <p id="delete-confirm-error" class="form-error" role="alert">
                                    {move || delete_error.get()}
                                </p>
                            </Show>
                            <ConfirmAction
                                prompt="This cannot be undone."
                                on_confirm=on_delete_confirmed
                                on_cancel=cancel_delete
                                busy=loading
                                auto_focus_confirm=false
                            />
                        </div>
                    </Show>
                </div>
            </section>
        </AppLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback(String::new(), "Profile update failed."), "Profile update failed.");
        assert_eq!(or_fallback("Username already taken".into(), "x"), "Username already taken");
    }
}
