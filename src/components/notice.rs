//! Notice Components
//!
//! A single toast (`Notice`) and the provider that owns the toast stack.

use std::time::Duration;

use leptos::prelude::*;

use crate::context::NoticeContext;
use crate::notice::{AutoHideTimer, ToastKind};

fn palette(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Info => ("var(--panel-color)", "var(--text-color)"),
        ToastKind::Success => ("var(--success-color)", "#000"),
        ToastKind::Error => ("var(--danger-color)", "#fff"),
        ToastKind::Warn => ("var(--accent-color)", "#000"),
    }
}

/// One toast. Hovering pauses the auto-hide countdown.
#[component]
pub fn Notice(
    kind: ToastKind,
    #[prop(into)] message: String,
    #[prop(optional)] auto_hide_ms: Option<u32>,
    #[prop(into, optional)] on_close: Option<Callback<()>>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let timer = StoredValue::new(auto_hide_ms.and_then(AutoHideTimer::new));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let resume = move || {
        let (Some(on_close), Some(wait)) = (
            on_close,
            timer
                .try_update_value(|t| t.as_mut().and_then(|t| t.start(js_sys::Date::now())))
                .flatten(),
        ) else {
            return;
        };
        match set_timeout_with_handle(move || on_close.run(()), Duration::from_millis(wait as u64)) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(_) => web_sys::console::warn_1(&"[NOTICE] Could not schedule auto-hide".into()),
        }
    };

    let pause = move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        timer.update_value(|t| {
            if let Some(t) = t.as_mut() {
                t.pause(js_sys::Date::now());
            }
        });
    };

    resume();
    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let (bg, fg) = palette(kind);
    let style = format!(
        "max-width: 720px; margin-top: 0.5rem; background-color: {}; color: {}; border-color: var(--border-color); border-width: 4px; text-align: left;",
        bg, fg
    );

    view! {
        <div
            role="status"
            aria-live=if kind == ToastKind::Error { "assertive" } else { "polite" }
            class=format!("panel {}", class)
            style=style
            on:mouseenter=move |_| pause()
            on:mouseleave=move |_| resume()
        >
            <div style="display: flex; gap: 12px; align-items: flex-start;">
                <span style="text-shadow: 1px 1px #000;">{kind.icon()}</span>
                <div style="flex: 1;">{message}</div>
                {on_close
                    .map(|on_close| {
                        view! {
                            <button style="font-size: 10px;" on:click=move |_| on_close.run(())>
                                "dismiss"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}

/// Provides [`NoticeContext`] and renders the toast stack above the page
#[component]
pub fn NoticeProvider(children: Children) -> impl IntoView {
    let notice = NoticeContext::new();
    provide_context(notice);

    view! {
        {children()}
        <div class="toast-container is-top" aria-live="polite">
            <For
                each=move || notice.queue.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <Notice
                            kind=toast.kind
                            message=toast.message
                            auto_hide_ms=toast.auto_hide_ms
                            on_close=Callback::new(move |_| notice.remove(id))
                            class="pixel-toast"
                        />
                    }
                }
            />
        </div>
    }
}
