//! Status Bar Component
//!
//! Chunky progress bar for a single pet stat.

use leptos::prelude::*;

/// Values under this are highlighted
pub const LOW_THRESHOLD: i64 = 25;

/// Round and clamp into 0..=100; non-finite input reads as 0
pub fn normalize_stat(value: f64) -> i64 {
    if value.is_finite() {
        value.round().clamp(0.0, 100.0) as i64
    } else {
        0
    }
}

#[component]
pub fn StatusBarPixel(
    #[prop(default = "Fullness")] label: &'static str,
    #[prop(into)] value: Signal<f64>,
    /// BEM modifier: fullness / happiness / energy
    #[prop(default = "fullness")] kind: &'static str,
    #[prop(default = true)] show_percent: bool,
    #[prop(default = true)] show_low_hint: bool,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let v = Memo::new(move |_| normalize_stat(value.get()));
    let low = move || v.get() < LOW_THRESHOLD;

    let classes = move || {
        let mut classes = format!("status-bar status-bar--{}", kind);
        if low() {
            classes.push_str(" status-bar--low");
        }
        if compact {
            classes.push_str(" status-bar--compact");
        }
        classes
    };

    view! {
        <div
            class=classes
            role="progressbar"
            aria-label=label
            aria-valuenow=move || v.get().to_string()
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuetext=move || {
                format!("{} {} percent{}", label, v.get(), if low() { " (low)" } else { "" })
            }
            title=move || format!("{}: {}%", label, v.get())
            data-kind=kind
            data-low=move || low().then_some("true")
        >
            <div class="status-fill" style:width=move || format!("{}%", v.get())></div>
            <div class="status-label">
                {move || {
                    if show_percent { format!("{}: {}%", label, v.get()) } else { label.to_string() }
                }}
            </div>
            <Show when=move || show_low_hint && low()>
                <span class="status-hint" aria-hidden="true">"⚠️ low"</span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rounds_and_clamps() {
        assert_eq!(normalize_stat(72.5), 73);
        assert_eq!(normalize_stat(-3.0), 0);
        assert_eq!(normalize_stat(140.0), 100);
        assert_eq!(normalize_stat(f64::NAN), 0);
    }
}
