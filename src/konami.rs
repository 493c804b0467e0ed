//! Konami Code
//!
//! Watches window keydowns for ↑ ↑ ↓ ↓ ← → ← → b a. A match flips the
//! Game Boy palette and fires a big confetti burst.

use std::cell::RefCell;

use leptos::ev;
use leptos::prelude::*;

use crate::confetti::{self, ConfettiOptions};
use crate::theme;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Sliding window over the most recent keys
#[derive(Clone, Debug, Default)]
pub struct KonamiBuffer {
    keys: Vec<String>,
}

impl KonamiBuffer {
    /// Record a key; true when the last keys spell the sequence
    pub fn push(&mut self, key: &str) -> bool {
        self.keys.push(key.to_string());
        if self.keys.len() > KONAMI_SEQUENCE.len() {
            let overflow = self.keys.len() - KONAMI_SEQUENCE.len();
            self.keys.drain(..overflow);
        }
        self.keys.iter().map(String::as_str).eq(KONAMI_SEQUENCE)
    }
}

/// Run `on_unlock` each time the sequence is entered while the caller is mounted
pub fn use_konami(on_unlock: impl Fn() + 'static) {
    let buffer = RefCell::new(KonamiBuffer::default());
    let handle = window_event_listener(ev::keydown, move |event| {
        if buffer.borrow_mut().push(&event.key()) {
            let active = theme::toggle_gameboy();
            web_sys::console::log_1(&format!("[KONAMI] Unlocked, gb theme: {}", active).into());
            confetti::burst_with(ConfettiOptions {
                particle_count: 120,
                spread: 90,
                ..Default::default()
            });
            on_unlock();
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(buffer: &mut KonamiBuffer, keys: &[&str]) -> bool {
        keys.iter().fold(false, |_, key| buffer.push(key))
    }

    #[test]
    fn test_detects_sequence() {
        let mut buffer = KonamiBuffer::default();
        assert!(feed(&mut buffer, &KONAMI_SEQUENCE));
    }

    #[test]
    fn test_ignores_leading_noise() {
        let mut buffer = KonamiBuffer::default();
        feed(&mut buffer, &["x", "Enter", "ArrowUp"]);
        assert!(feed(&mut buffer, &KONAMI_SEQUENCE));
    }

    #[test]
    fn test_wrong_key_breaks_sequence() {
        let mut buffer = KonamiBuffer::default();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[8] = "B";
        assert!(!feed(&mut buffer, &keys));
    }

    #[test]
    fn test_partial_sequence_does_not_match() {
        let mut buffer = KonamiBuffer::default();
        assert!(!feed(&mut buffer, &KONAMI_SEQUENCE[..9]));
    }
}
