//! Toast Queue
//!
//! Pure state behind `NoticeProvider`. At most [`MAX_TOASTS`] are visible;
//! pushing past the cap evicts the oldest. A push with the same kind and raw
//! text as a toast created within [`DEDUPE_WINDOW_MS`] is dropped and the
//! existing id is returned.

pub const MAX_TOASTS: usize = 4;
pub const DEDUPE_WINDOW_MS: f64 = 1500.0;
pub const DEFAULT_AUTO_HIDE_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Info,
    Success,
    Warn,
    Error,
}

impl ToastKind {
    /// Prefix added to the displayed message
    pub fn emoji(self) -> &'static str {
        match self {
            ToastKind::Success => "🎉 ",
            ToastKind::Error => "🛑 ",
            ToastKind::Warn => "⚠️ ",
            ToastKind::Info => "💡 ",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warn => "⚠️",
            ToastKind::Info => "🛈",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warn => "warn",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    /// Text as pushed, used for dedupe
    pub raw: String,
    /// Text as displayed
    pub message: String,
    pub auto_hide_ms: u32,
    pub timestamp: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Add a toast and return its id (or the id of the duplicate it matched)
    pub fn push(&mut self, kind: ToastKind, raw: &str, auto_hide_ms: u32, now: f64) -> u32 {
        if let Some(existing) = self
            .toasts
            .iter()
            .find(|t| t.kind == kind && t.raw == raw && now - t.timestamp < DEDUPE_WINDOW_MS)
        {
            return existing.id;
        }

        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            raw: raw.to_string(),
            message: format!("{}{}", kind.emoji(), raw),
            auto_hide_ms,
            timestamp: now,
        });

        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn remove(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Auto-hide countdown that can be paused while hovered
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoHideTimer {
    remaining_ms: f64,
    started_at: Option<f64>,
}

impl AutoHideTimer {
    /// `None` for 0, which keeps the toast until dismissed
    pub fn new(duration_ms: u32) -> Option<Self> {
        (duration_ms > 0).then(|| Self {
            remaining_ms: duration_ms as f64,
            started_at: None,
        })
    }

    /// Start (or resume) counting and return how long to wait.
    /// `None` while already running, so no second timeout gets scheduled.
    pub fn start(&mut self, now: f64) -> Option<f64> {
        if self.is_running() {
            return None;
        }
        self.started_at = Some(now);
        Some(self.remaining_ms)
    }

    /// Stop counting and keep the unused time
    pub fn pause(&mut self, now: f64) -> f64 {
        if let Some(started) = self.started_at.take() {
            self.remaining_ms = (self.remaining_ms - (now - started)).max(0.0);
        }
        self.remaining_ms
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_prefixes_message() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastKind::Success, "Nom nom! 🍖", DEFAULT_AUTO_HIDE_MS, 0.0);

        let toast = &queue.toasts()[0];
        assert_eq!(toast.id, id);
        assert_eq!(toast.message, "🎉 Nom nom! 🍖");
        assert_eq!(toast.raw, "Nom nom! 🍖");
        assert_eq!(toast.auto_hide_ms, 3000);
    }

    #[test]
    fn test_duplicate_within_window_returns_existing_id() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastKind::Error, "Network error", 3000, 1000.0);
        let second = queue.push(ToastKind::Error, "Network error", 3000, 2400.0);

        assert_eq!(first, second);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_duplicate_after_window_is_new() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastKind::Error, "Network error", 3000, 1000.0);
        let second = queue.push(ToastKind::Error, "Network error", 3000, 2500.0);

        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_same_text_different_kind_is_not_duplicate() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Info, "Saved", 3000, 0.0);
        queue.push(ToastKind::Success, "Saved", 3000, 10.0);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut queue = ToastQueue::new();
        let ids: Vec<u32> = (0..6)
            .map(|i| queue.push(ToastKind::Info, &format!("toast {i}"), 3000, i as f64))
            .collect();

        assert_eq!(queue.len(), MAX_TOASTS);
        let kept: Vec<u32> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(kept, ids[2..].to_vec());
    }

    #[test]
    fn test_remove() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Info, "a", 3000, 0.0);
        let b = queue.push(ToastKind::Info, "b", 3000, 0.0);
        queue.remove(a);
        queue.remove(999);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn test_timer_pause_keeps_remaining_time() {
        let mut timer = AutoHideTimer::new(3000).unwrap();
        assert_eq!(timer.start(100.0), Some(3000.0));
        assert_eq!(timer.pause(1100.0), 2000.0);
        assert!(!timer.is_running());

        // pausing twice does not consume more time
        assert_eq!(timer.pause(5000.0), 2000.0);
        assert_eq!(timer.start(6000.0), Some(2000.0));
        assert_eq!(timer.pause(9000.0), 0.0);
    }

    #[test]
    fn test_timer_does_not_start_twice() {
        let mut timer = AutoHideTimer::new(3000).unwrap();
        assert_eq!(timer.start(0.0), Some(3000.0));
        // leaving without having entered must not schedule a second close
        assert_eq!(timer.start(500.0), None);
        assert_eq!(timer.pause(1000.0), 2000.0);
        assert_eq!(timer.start(1500.0), Some(2000.0));
    }

    #[test]
    fn test_zero_never_auto_hides() {
        assert!(AutoHideTimer::new(0).is_none());
    }
}
