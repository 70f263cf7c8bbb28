//! Scrim Core - Animated modal overlays without a GUI dependency
//!
//! This crate holds everything about a modal that can be decided without
//! drawing pixels:
//!
//! 1. **Animation**: easing curves and a time-driven scalar (`AnimatedValue`)
//!    that the modal uses for its content scale and backdrop opacity.
//!
//! 2. **Modal state machine**: `Modal<C>` tracks Hidden → Showing → Visible →
//!    Hiding → Hidden, owns caller-supplied content and the close callback,
//!    and decides what a backdrop tap means while the on-screen keyboard is up.
//!
//! 3. **Host**: `ModalHost` is the fixed-capacity registry that the
//!    application root constructs once and passes to whoever needs to open
//!    or close a modal by id.
//!
//! Time is always passed in by the caller (`std::time::Instant`), so every
//! transition can be driven deterministically from tests.

pub mod animation;
pub mod config;
pub mod easing;
pub mod error;
pub mod keyboard;
pub mod modal;
pub mod registry;

pub use animation::{AnimatedValue, AnimationEnd, AnimationId, Interpolation, TimingConfig};
pub use config::{BackdropConfig, ModalConfig, Validate};
pub use easing::Easing;
pub use error::{ModalError, ModalResult};
pub use keyboard::{KeyboardEvent, KeyboardListeners, KeyboardPlatform, ListenerHandle};
pub use modal::{Contents, Dismissal, Frame, Modal, ModalEvent, ModalId, OnClose, Phase};
pub use registry::{ModalHost, MODAL_SLOTS};
