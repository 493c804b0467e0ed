//! Confirm Dialog Component
//!
//! Modal yes/no prompt. Escape cancels, Enter confirms and a click on the
//! backdrop cancels. The confirm button takes focus when the dialog opens.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

const CONFIRM_HZ: f32 = 880.0;
const CANCEL_HZ: f32 = 440.0;
const BEEP_SECONDS: f64 = 0.05;

/// Short square-wave chirp; silently skipped when audio is unavailable
fn tiny_beep(freq: f32, duration: f64) {
    let play = || -> Result<(), JsValue> {
        let ctx = AudioContext::new()?;
        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        osc.set_type(OscillatorType::Square);
        osc.frequency().set_value(freq);

        let now = ctx.current_time();
        gain.gain().set_value_at_time(0.06, now)?;
        gain.gain().exponential_ramp_to_value_at_time(0.0001, now + duration)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(now)?;
        osc.stop_with_when(now + duration)?;
        Ok(())
    };

    if play().is_err() {
        web_sys::console::log_1(&"[DIALOG] Audio unavailable".into());
    }
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into, default = Signal::stored("Are you sure?".to_string()))] title: Signal<String>,
    #[prop(into, default = Signal::stored("This action cannot be undone.".to_string()))]
    message: Signal<String>,
    #[prop(default = "Confirm")] confirm_label: &'static str,
    #[prop(default = "Cancel")] cancel_label: &'static str,
    #[prop(optional)] danger: bool,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional)] beep: bool,
) -> impl IntoView {
    let confirm_ref = NodeRef::<html::Button>::new();

    let confirm = move || {
        if beep {
            tiny_beep(CONFIRM_HZ, BEEP_SECONDS);
        }
        on_confirm.run(());
    };
    let cancel = move || {
        if beep {
            tiny_beep(CANCEL_HZ, BEEP_SECONDS);
        }
        on_cancel.run(());
    };

    let handle = window_event_listener(ev::keydown, move |event| {
        if !open.get_untracked() {
            return;
        }
        match event.key().as_str() {
            "Escape" => on_cancel.run(()),
            "Enter" => {
                // keep the focused button from firing a second click
                event.prevent_default();
                on_confirm.run(());
            }
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    Effect::new(move |_| {
        if open.get() {
            request_animation_frame(move || {
                if let Some(button) = confirm_ref.get_untracked() {
                    let _ = button.focus();
                }
            });
        }
    });

    let on_backdrop = move |event: ev::MouseEvent| {
        if event.target() == event.current_target() {
            cancel();
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" role="presentation" on:mousedown=on_backdrop>
                <section
                    class="panel panel--narrow dialog"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="confirm-dialog-title"
                    aria-describedby="confirm-dialog-message"
                >
                    <header class="panel__header">
                        <h2 id="confirm-dialog-title" class="panel__title">
                            {move || title.get()}
                        </h2>
                    </header>
                    <div class="panel__body u-stack-md">
                        <p id="confirm-dialog-message">{move || message.get()}</p>
                        <div class="u-actions-row">
                            <button
                                type="button"
                                node_ref=confirm_ref
                                class=if danger { "btn btn--danger" } else { "btn" }
                                on:click=move |_| confirm()
                            >
                                {confirm_label}
                            </button>
                            <button type="button" class="btn btn--ghost" on:click=move |_| cancel()>
                                {cancel_label}
                            </button>
                        </div>
                    </div>
                </section>
            </div>
        </Show>
    }
}
