//! UI Components
//!
//! Layout chrome, pet widgets, dialogs and toasts. The nav bar, footer and
//! theme toggle are only reachable through `AppLayout`.

pub mod adopt_form;
pub mod app_layout;
pub mod confirm_action;
pub mod confirm_dialog;
mod footer;
pub mod header;
pub mod loading_card;
mod nav_bar;
pub mod notice;
pub mod pet_sprite;
pub mod require_auth;
pub mod status_bar;
mod theme_toggle;

pub use adopt_form::AdoptForm;
pub use app_layout::AppLayout;
pub use confirm_action::ConfirmAction;
pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use loading_card::LoadingCard;
pub use notice::NoticeProvider;
pub use pet_sprite::PetSprite;
pub use require_auth::RequireAuth;
pub use status_bar::StatusBarPixel;
