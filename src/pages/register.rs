//! Register Page

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::focus_by_id;
use crate::api;
use crate::auth;
use crate::brand::toasts;
use crate::components::AppLayout;
use crate::context::use_notice;
use crate::lifecycle::use_mounted;
use crate::validation::{is_valid_email, validate_register, Field};

#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_navigate();
    let notice = use_notice();
    let mounted = use_mounted();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(String::new());
    let username_ref = NodeRef::<html::Input>::new();

    let nav = navigate.clone();
    Effect::new(move |_| {
        if auth::is_logged_in() {
            nav("/dashboard", NavigateOptions { replace: true, ..Default::default() });
        } else if let Some(input) = username_ref.get() {
            let _ = input.focus();
        }
    });

    let show_error = move |message: String| {
        notice.error(&message);
        set_error_msg.set(message);
        focus_by_id("register-error");
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error_msg.set(String::new());

        let name = username.get_untracked().trim().to_string();
        let address = email.get_untracked().trim().to_string();
        let secret = password.get_untracked();
        if let Err(err) = validate_register(&name, &address, &secret) {
            show_error(err.message.to_string());
            match err.field {
                Field::Username => focus_by_id("reg-username"),
                Field::Email => focus_by_id("reg-email"),
                _ => {}
            }
            return;
        }

        set_loading.set(true);
        let mounted = mounted.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&name, &address, &secret).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(user_id) => {
                    web_sys::console::log_1(&format!("[REGISTER] Created user {}", user_id).into());
                    auth::set_user_id(user_id);
                    notice.success(toasts::ACCOUNT_CREATED);
                    set_loading.set(false);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    show_error(if e.message.is_empty() { "Registration failed.".to_string() } else { e.message });
                    set_loading.set(false);
                }
            }
        });
    };

    let has_error = move || !error_msg.get().is_empty();

    view! {
        <AppLayout title="REGISTER">
            <section class="panel">
                <header class="panel__header">
                    <h1 class="panel__title">"Create Account"</h1>
                </header>
                <div class="panel__body">
                    <form class="form" on:submit=on_submit novalidate>
                        <div class="form__row">
                            <label class="label" for="reg-username">"Username"</label>
                            <input
                                id="reg-username"
                                node_ref=username_ref
                                name="username"
                                placeholder="username"
                                prop:value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                autocomplete="username"
                                disabled=move || loading.get()
                                required
                                aria-required="true"
                                aria-invalid=move || {
                                    (has_error() && username.with(|u| u.trim().chars().count() < 3)).to_string()
                                }
                            />
                        </div>
                        <div class="form__row">
                            <label class="label" for="reg-email">"Email"</label>
                            <input
                                id="reg-email"
                                name="email"
                                type="email"
                                placeholder="email@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                autocomplete="email"
                                disabled=move || loading.get()
                                required
                                aria-required="true"
                                aria-invalid=move || (has_error() && !email.with(|e| is_valid_email(e))).to_string()
                            />
                        </div>
                        <div class="form__row">
                            <label class="label" for="reg-password">"Password"</label>
                            <input
                                id="reg-password"
                                name="password"
                                type="password"
                                placeholder="minimum 8 characters"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                autocomplete="new-password"
                                disabled=move || loading.get()
                                required
                                aria-required="true"
                                aria-invalid=move || { (has_error() && password.with(|p| p.chars().count() < 8)).to_string() }
                            />
                        </div>

                        <Show when=has_error>
                            <div id="register-error" class="form-error" role="alert" aria-live="assertive" tabindex="-1">
                                {move || error_msg.get()}
                            </div>
                        </Show>

                        <div class="form__row u-text-center">
                            <button class="btn" type="submit" disabled=move || loading.get()>
                                {move || if loading.get() { "Registering..." } else { "Register" }}
                            </button>
                        </div>

                        <div class="form__row u-text-center">
                            <p>"Already have an account?"</p>
                            <div class="u-actions-row">
                                <a href="/login" class="btn btn--secondary">"Log In"</a>
                            </div>
                        </div>
                    </form>
                </div>
            </section>
        </AppLayout>
    }
}
