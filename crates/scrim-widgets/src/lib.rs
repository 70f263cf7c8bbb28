//! iced widgets for scrim modals
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State** lives in `scrim_core::ModalHost`; this crate never owns it
//! - **View functions** take a `scrim_core::Frame` plus a content callback and
//!   return `Element<Message>`
//! - **Subscriptions** feed keyboard notifications and animation frames back
//!   into the app's `update`

pub mod overlay;
pub mod subscription;
pub mod theme;

pub use overlay::{build_backdrop, modal_layer, modal_view, with_modals};
pub use subscription::{
    frame_ticks, keyboard_channel, keyboard_subscription, KeyboardReceiver, FRAME_INTERVAL,
};
pub use theme::{backdrop_color, card_style, dialog_button, ACCENT_BG, DANGER_BG, NEUTRAL_BG};
