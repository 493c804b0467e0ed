//! Confetti
//!
//! Bursts through the `canvas-confetti` script loaded by `index.html`. A burst
//! fires on every animation frame for [`BURST_MS`]. Missing script is a no-op.

use leptos::prelude::request_animation_frame;
use serde::Serialize;
use wasm_bindgen::prelude::*;

const BURST_MS: f64 = 600.0;

const COLORS: [&str; 6] = ["#ffcc00", "#ffec27", "#ff66a3", "#00ffcc", "#ffffff", "#000000"];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = confetti, catch)]
    fn canvas_confetti(options: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Clone, Debug, Serialize)]
pub struct Origin {
    pub y: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiOptions {
    pub particle_count: u32,
    pub start_velocity: u32,
    pub spread: u32,
    pub origin: Origin,
    pub colors: Vec<&'static str>,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        Self {
            particle_count: 50,
            start_velocity: 45,
            spread: 70,
            origin: Origin { y: 0.6 },
            colors: COLORS.to_vec(),
        }
    }
}

/// Default burst
pub fn burst() {
    burst_with(ConfettiOptions::default());
}

pub fn burst_with(options: ConfettiOptions) {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let options = match options.serialize(&serializer) {
        Ok(value) => value,
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFETTI] Bad options: {}", e).into());
            return;
        }
    };
    let end = js_sys::Date::now() + BURST_MS;
    frame(options, end);
}

fn frame(options: JsValue, end: f64) {
    if canvas_confetti(&options).is_err() {
        // script not loaded
        return;
    }
    if js_sys::Date::now() < end {
        request_animation_frame(move || frame(options, end));
    }
}
