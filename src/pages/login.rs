//! Login Page

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::auth;
use crate::brand::toasts;
use crate::components::AppLayout;
use crate::context::use_notice;
use crate::lifecycle::use_mounted;
use crate::validation::{validate_login, Field};

#[component]
pub fn Login() -> impl IntoView {
    let navigate = use_navigate();
    let notice = use_notice();
    let mounted = use_mounted();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(String::new());
    let username_ref = NodeRef::<html::Input>::new();
    let password_ref = NodeRef::<html::Input>::new();

    let nav = navigate.clone();
    Effect::new(move |_| {
        if auth::is_logged_in() {
            nav("/dashboard", NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let focus = move |node: NodeRef<html::Input>| {
        if let Some(input) = node.get_untracked() {
            let _ = input.focus();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_error_msg.set(String::new());

        let name = username.get_untracked().trim().to_string();
        let secret = password.get_untracked();
        if let Err(err) = validate_login(&name, &secret) {
            set_error_msg.set(err.message.to_string());
            notice.error(err.message);
            focus(if err.field == Field::Username { username_ref } else { password_ref });
            return;
        }

        set_loading.set(true);
        let mounted = mounted.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&name, &secret).await;
            if !mounted.get() {
                return;
            }
            match result {
                Ok(user_id) => {
                    web_sys::console::log_1(&format!("[LOGIN] Signed in as user {}", user_id).into());
                    auth::set_user_id(user_id);
                    notice.success(toasts::WELCOME);
                    set_loading.set(false);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    let message = if e.message.is_empty() { "Login failed.".to_string() } else { e.message };
                    set_error_msg.set(message.clone());
                    notice.error(message);
                    focus(username_ref);
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <AppLayout title="LOGIN">
            <section class="panel">
                <header class="panel__header">
                    <h1 class="panel__title">"Log In"</h1>
                </header>
                <div class="panel__body">
                    <form class="form" on:submit=on_submit novalidate>
                        <div class="form__row">
                            <label class="label" for="login-username">"Username"</label>
                            <input
                                id="login-username"
                                node_ref=username_ref
                                name="username"
                                placeholder="Username"
                                prop:value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                autocomplete="username"
                                disabled=move || loading.get()
                                required
                            />
                        </div>
                        <div class="form__row">
                            <label class="label" for="login-password">"Password"</label>
                            <input
                                id="login-password"
                                node_ref=password_ref
                                name="password"
                                type="password"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                autocomplete="current-password"
                                disabled=move || loading.get()
                                required
                            />
                        </div>

                        <Show when=move || !error_msg.get().is_empty()>
                            <p class="form-error" role="alert">{move || error_msg.get()}</p>
                        </Show>

                        <div class="form__row u-text-center">
                            <button class="btn" type="submit" disabled=move || loading.get()>
                                {move || if loading.get() { "Signing in…" } else { "Log In" }}
                            </button>
                        </div>

                        <div class="form__row u-text-center">
                            <p>"New to Pixel Pets?"</p>
                            <a href="/register" class="btn btn--secondary">"Create Account"</a>
                        </div>
                    </form>
                </div>
            </section>
        </AppLayout>
    }
}
