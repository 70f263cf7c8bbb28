//! Modal overlay state machine
//!
//! A modal grows in from scale 0 over a dimmed backdrop and shrinks back out
//! when hidden. The backdrop opacity is always derived from the same scale
//! value, so the two never drift apart.
//!
//! ## Lifecycle
//!
//! ```text
//! Hidden --show--> Showing --done--> Visible --hide--> Hiding --done--> Hidden
//!                     ^                                   |
//!                     +---------------show----------------+
//! ```
//!
//! - `show` marks the modal visible *before* the animation starts.
//! - A hide only marks it invisible once the animation completes; the close
//!   callback runs after that, then the optional reset.
//! - Showing during a hide cancels the hide: no close callback, no reset.
//! - Hiding an already hidden modal still runs a (flat) hide, so the close
//!   callback and reset happen once it completes.

mod contents;

pub use contents::{Contents, OnClose};

use std::time::Instant;

use crate::animation::{AnimatedValue, AnimationId, Interpolation};
use crate::config::ModalConfig;
use crate::keyboard::{KeyboardEvent, KeyboardListeners, KeyboardSubscriptions};

/// Slot index of a modal inside its host
pub type ModalId = usize;

/// Where the modal is in its show/hide cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Showing(AnimationId),
    Visible,
    Hiding(AnimationId),
}

/// Reported by `Modal::tick` when an animation completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Grow-in finished
    Shown,
    /// Shrink-out finished and the close callback ran
    Closed,
}

/// What a backdrop tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The modal started hiding
    Hide,
    /// The keyboard was up; the platform should dismiss it instead
    DismissKeyboard,
}

/// Everything a renderer needs for one frame
#[derive(Debug)]
pub struct Frame<'a, C> {
    pub id: ModalId,
    /// Backdrop opacity (0.0-1.0), derived from `scale`
    pub backdrop_opacity: f32,
    /// Content scale (0.0-1.0)
    pub scale: f32,
    pub content: &'a C,
}

impl<C> Clone for Frame<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Frame<'_, C> {}

/// A single modal instance
pub struct Modal<C> {
    id: ModalId,
    config: ModalConfig,
    phase: Phase,
    visible: bool,
    scale: AnimatedValue,
    backdrop: Interpolation,
    content: C,
    on_close: OnClose,
    unregister_on_close: bool,
    keyboard_visible: bool,
    subscriptions: Option<KeyboardSubscriptions>,
}

impl<C: Default> Modal<C> {
    pub fn new(id: ModalId, config: ModalConfig) -> Self {
        let backdrop = config.backdrop_interpolation();
        Self {
            id,
            config,
            phase: Phase::Hidden,
            visible: false,
            scale: AnimatedValue::new(0.0),
            backdrop,
            content: C::default(),
            on_close: contents::noop(),
            unregister_on_close: true,
            keyboard_visible: false,
            subscriptions: None,
        }
    }

    pub fn id(&self) -> ModalId {
        self.id
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Replace the configuration; takes effect from the next animation
    pub fn set_config(&mut self, config: ModalConfig) {
        self.backdrop = config.backdrop_interpolation();
        self.config = config;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the backdrop and content are rendered
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_animating()
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access for content that edits itself (text fields etc.)
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn unregisters_on_close(&self) -> bool {
        self.unregister_on_close
    }

    /// Current content scale (0.0-1.0)
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Current backdrop opacity, derived from the scale
    pub fn backdrop_opacity(&self) -> f32 {
        self.scale.interpolate(&self.backdrop)
    }

    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }

    pub fn is_mounted(&self) -> bool {
        self.subscriptions.is_some()
    }

    /// Replace content, close callback, and cleanup policy
    ///
    /// Visibility and animation are untouched.
    pub fn set_contents(&mut self, contents: Contents<C>) {
        self.content = contents.content;
        self.on_close = contents.on_close;
        self.unregister_on_close = contents.unregister_on_close;
        if self.visible {
            log::debug!("modal {}: contents replaced while visible", self.id);
        }
    }

    /// `set_contents` followed by `show`
    pub fn show_contents(&mut self, contents: Contents<C>, now: Instant) {
        self.set_contents(contents);
        self.show(now);
    }

    pub fn show(&mut self, now: Instant) {
        self.animate(true, now);
    }

    pub fn hide(&mut self, now: Instant) {
        self.animate(false, now);
    }

    /// Start animating toward shown (`true`) or hidden (`false`)
    ///
    /// Any running animation is replaced. Hiding an already hidden modal
    /// animates from 0 to 0 and stays invisible, but still closes when done.
    pub fn animate(&mut self, show: bool, now: Instant) {
        if show {
            self.visible = true;
        }

        let (id, interrupted) = self.scale.start(self.config.timing(show), now);
        if let Some(end) = interrupted {
            log::debug!(
                "modal {}: {:?} interrupted by {}",
                self.id,
                self.phase,
                if show { "show" } else { "hide" }
            );
            debug_assert!(!end.finished);
        }

        self.phase = if show {
            Phase::Showing(id)
        } else {
            Phase::Hiding(id)
        };
        log::debug!("modal {}: -> {:?} from scale {:.3}", self.id, self.phase, self.scale());
    }

    /// Advance the animation to `now`
    pub fn tick(&mut self, now: Instant) -> Option<ModalEvent> {
        let end = self.scale.tick(now)?;

        match self.phase {
            Phase::Showing(id) if id == end.id => {
                self.phase = Phase::Visible;
                log::debug!("modal {}: shown", self.id);
                Some(ModalEvent::Shown)
            }
            Phase::Hiding(id) if id == end.id => {
                self.finish_hide();
                Some(ModalEvent::Closed)
            }
            phase => {
                log::warn!(
                    "modal {}: animation {:?} ended in unexpected phase {:?}",
                    self.id,
                    end.id,
                    phase
                );
                None
            }
        }
    }

    fn finish_hide(&mut self) {
        self.visible = false;
        self.phase = Phase::Hidden;
        log::debug!("modal {}: closed", self.id);

        (self.on_close)();
        if self.unregister_on_close {
            self.reset();
        }
    }

    /// Handle a tap on the backdrop
    ///
    /// With the keyboard up the first tap only dismisses the keyboard;
    /// the modal stays open until the next tap. Otherwise the tap always
    /// starts a hide, even on a hidden modal.
    pub fn backdrop_dismiss(&mut self, now: Instant) -> Dismissal {
        if self.keyboard_visible {
            log::debug!("modal {}: backdrop tap dismisses keyboard", self.id);
            Dismissal::DismissKeyboard
        } else {
            self.hide(now);
            Dismissal::Hide
        }
    }

    /// Clear content and close callback, leaving visibility alone
    pub fn reset(&mut self) {
        self.content = C::default();
        self.on_close = contents::noop();
    }

    /// Subscribe to keyboard notifications
    pub fn mount(&mut self, listeners: &mut KeyboardListeners) {
        if self.subscriptions.is_some() {
            log::warn!("modal {}: already mounted", self.id);
            return;
        }
        self.subscriptions = Some(KeyboardSubscriptions {
            show: listeners.add_listener(KeyboardEvent::DidShow, self.id),
            hide: listeners.add_listener(KeyboardEvent::DidHide, self.id),
        });
    }

    /// Release keyboard subscriptions
    pub fn unmount(&mut self, listeners: &mut KeyboardListeners) {
        if let Some(subscriptions) = self.subscriptions.take() {
            listeners.remove(subscriptions.show);
            listeners.remove(subscriptions.hide);
        }
        // Notifications are not delivered while unmounted
        self.keyboard_visible = false;
    }

    pub fn on_keyboard(&mut self, event: KeyboardEvent) {
        self.keyboard_visible = event == KeyboardEvent::DidShow;
    }

    /// Snapshot for rendering, `None` while not visible
    pub fn frame(&self) -> Option<Frame<'_, C>> {
        if !self.visible {
            return None;
        }
        Some(Frame {
            id: self.id,
            backdrop_opacity: self.backdrop_opacity(),
            scale: self.scale(),
            content: &self.content,
        })
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Modal<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modal")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("visible", &self.visible)
            .field("scale", &self.scale.value())
            .field("content", &self.content)
            .field("unregister_on_close", &self.unregister_on_close)
            .field("keyboard_visible", &self.keyboard_visible)
            .field("mounted", &self.subscriptions.is_some())
            .finish_non_exhaustive()
    }
}
