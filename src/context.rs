//! Application Context
//!
//! Toast notifications shared via the Leptos Context API.

use leptos::prelude::*;

use crate::notice::{ToastKind, ToastQueue, DEFAULT_AUTO_HIDE_MS};

/// Handle for showing toasts from any component under `NoticeProvider`
#[derive(Clone, Copy)]
pub struct NoticeContext {
    /// Visible toasts - read by `NoticeProvider`
    pub queue: RwSignal<ToastQueue>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    /// Show a toast; returns its id
    pub fn notify(&self, kind: ToastKind, message: impl AsRef<str>, auto_hide_ms: u32) -> u32 {
        let now = js_sys::Date::now();
        self.queue
            .try_update(|queue| queue.push(kind, message.as_ref(), auto_hide_ms, now))
            .unwrap_or_default()
    }

    pub fn info(&self, message: impl AsRef<str>) -> u32 {
        self.notify(ToastKind::Info, message, DEFAULT_AUTO_HIDE_MS)
    }

    pub fn success(&self, message: impl AsRef<str>) -> u32 {
        self.notify(ToastKind::Success, message, DEFAULT_AUTO_HIDE_MS)
    }

    pub fn warn(&self, message: impl AsRef<str>) -> u32 {
        self.notify(ToastKind::Warn, message, DEFAULT_AUTO_HIDE_MS)
    }

    pub fn error(&self, message: impl AsRef<str>) -> u32 {
        self.notify(ToastKind::Error, message, DEFAULT_AUTO_HIDE_MS)
    }

    /// Dismiss a toast by id
    pub fn remove(&self, id: u32) {
        self.queue.update(|queue| queue.remove(id));
    }
}

impl Default for NoticeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the notice handle from context
pub fn use_notice() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided by NoticeProvider")
}
