//! Pet Sprite Component
//!
//! Pixel-art image for a pet type, falling back to an emoji glyph when the
//! type has no sprite or the image fails to load.

use leptos::prelude::*;

/// Image path for a known pet type
pub fn sprite_src(pet_type: &str) -> Option<&'static str> {
    match pet_type {
        "Dog" => Some("/pets/dog.png"),
        "Cat" => Some("/pets/cat.png"),
        "Dragon" => Some("/pets/dragon.png"),
        _ => None,
    }
}

/// Glyph shown instead of the image
pub fn sprite_emoji(pet_type: &str) -> &'static str {
    match pet_type.to_lowercase().as_str() {
        "dog" => "🐶",
        "cat" => "🐱",
        "dragon" => "🐲",
        _ => "🐾",
    }
}

#[component]
pub fn PetSprite(
    #[prop(into)] pet_type: Signal<String>,
    #[prop(default = 120)] size: u32,
    /// Alt text; defaults to "{type} sprite"
    #[prop(into, optional)] title: Option<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let classes = format!("pet-sprite pet-anim--idle pet-anim--hover {}", class)
        .trim()
        .to_string();
    let alt = Signal::derive(move || {
        title
            .clone()
            .unwrap_or_else(|| format!("{} sprite", pet_type.get()))
    });

    // new type, new chance for the image
    Effect::new(move |_| {
        pet_type.track();
        set_failed.set(false);
    });

    move || {
        let kind = pet_type.get();
        match sprite_src(&kind).filter(|_| !failed.get()) {
            Some(src) => view! {
                <img
                    src=src
                    alt=move || alt.get()
                    title=move || alt.get()
                    width=size.to_string()
                    height=size.to_string()
                    decoding="async"
                    loading="lazy"
                    draggable="false"
                    class=classes.clone()
                    on:error=move |_| set_failed.set(true)
                />
            }
            .into_any(),
            None => view! {
                <div
                    role="img"
                    aria-label=move || alt.get()
                    title=move || alt.get()
                    class=classes.clone()
                    style=format!(
                        "width: {size}px; height: {size}px; display: flex; align-items: center; justify-content: center; user-select: none;",
                    )
                >
                    <span
                        aria-hidden="true"
                        style=format!("font-size: {}px; line-height: 1;", (size as f64 * 0.7).round())
                    >
                        {sprite_emoji(&kind)}
                    </span>
                </div>
            }
            .into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_have_sprites() {
        assert_eq!(sprite_src("Dragon"), Some("/pets/dragon.png"));
        assert_eq!(sprite_src("dog"), None);
        assert_eq!(sprite_src("Hamster"), None);
    }

    #[test]
    fn test_emoji_fallback_ignores_case() {
        assert_eq!(sprite_emoji("CAT"), "🐱");
        assert_eq!(sprite_emoji("dragon"), "🐲");
        assert_eq!(sprite_emoji(""), "🐾");
    }
}
