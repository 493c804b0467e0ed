//! Confirm Action Component
//!
//! Inline confirm/cancel strip for destructive actions.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn ConfirmAction(
    #[prop(default = "Are you sure?")] prompt: &'static str,
    #[prop(default = "Confirm delete")] confirm_label: &'static str,
    #[prop(default = "Cancel")] cancel_label: &'static str,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into, optional)] busy: Signal<bool>,
    #[prop(into, optional)] class: String,
    #[prop(default = true)] danger: bool,
    #[prop(default = true)] auto_focus_confirm: bool,
) -> impl IntoView {
    let confirm_ref = NodeRef::<html::Button>::new();

    if auto_focus_confirm {
        Effect::new(move |_| {
            if let Some(button) = confirm_ref.get() {
                let _ = button.focus();
            }
        });
    }

    let on_keydown = move |event: ev::KeyboardEvent| {
        if busy.get_untracked() {
            return;
        }
        match event.key().as_str() {
            "Enter" => {
                event.prevent_default();
                on_confirm.run(());
            }
            "Escape" => {
                event.prevent_default();
                on_cancel.run(());
            }
            _ => {}
        }
    };

    view! {
        <div
            class=format!("confirm panel {}", class).trim().to_string()
            role="alertdialog"
            aria-labelledby="confirm-action-prompt"
            aria-modal="false"
            on:keydown=on_keydown
        >
            <div class="panel__body u-stack-sm">
                <p id="confirm-action-prompt">{prompt}</p>
                <div class="u-actions-row">
                    <button
                        node_ref=confirm_ref
                        class=if danger { "btn btn--danger" } else { "btn" }
                        on:click=move |_| on_confirm.run(())
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Deleting..." } else { confirm_label }}
                    </button>
                    <button
                        type="button"
                        class="btn btn--ghost"
                        on:click=move |_| on_cancel.run(())
                        disabled=move || busy.get()
                    >
                        {cancel_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
