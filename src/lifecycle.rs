//! Mount tracking for async work that may finish after a page is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

/// Cleared when the owning component is cleaned up
#[derive(Clone, Debug)]
pub struct Mounted(Arc<AtomicBool>);

impl Mounted {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Mounted {
    fn default() -> Self {
        Self::new()
    }
}

/// Flag tied to the current reactive owner
pub fn use_mounted() -> Mounted {
    let mounted = Mounted::new();
    let flag = mounted.clone();
    on_cleanup(move || flag.unmount());
    mounted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let mounted = Mounted::new();
        let other = mounted.clone();
        assert!(other.get());
        mounted.unmount();
        assert!(!other.get());
    }
}
