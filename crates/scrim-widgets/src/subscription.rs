//! Subscription helpers for modal animation and keyboard notifications
//!
//! Platform keyboard notifications arrive on a `std::sync::mpsc` channel
//! (the platform bridge may push from its own thread). This module turns that
//! channel into an iced `Subscription`, and provides the frame clock that
//! drives modal animations while any of them is moving.
//!
//! # Usage
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     Subscription::batch([
//!         keyboard_subscription(self.keyboard.receiver()).map(Message::Keyboard),
//!         frame_ticks(self.host.is_animating()).map(|_| Message::Frame),
//!     ])
//! }
//! ```

use std::any::TypeId;
use std::hash::Hash;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use iced::advanced::subscription::{self, EventStream, Hasher, Recipe};
use iced::futures::stream::BoxStream;
use iced::{time, Subscription};
use scrim_core::KeyboardEvent;

/// Interval between animation frames (~60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Shared receiving end of a keyboard notification channel
pub type KeyboardReceiver = Arc<Mutex<Receiver<KeyboardEvent>>>;

/// Create a keyboard notification channel
///
/// The sender goes to the platform bridge, the receiver to
/// `keyboard_subscription`.
pub fn keyboard_channel() -> (Sender<KeyboardEvent>, KeyboardReceiver) {
    let (tx, rx) = mpsc::channel();
    (tx, Arc::new(Mutex::new(rx)))
}

/// Recipe for polling the keyboard notification receiver.
struct KeyboardRecipe {
    /// Unique ID for subscription identity (receiver pointer)
    id: u64,
    receiver: KeyboardReceiver,
}

impl Recipe for KeyboardRecipe {
    type Output = KeyboardEvent;

    fn hash(&self, state: &mut Hasher) {
        TypeId::of::<Self>().hash(state);
        self.id.hash(state);
    }

    fn stream(self: Box<Self>, _input: EventStream) -> BoxStream<'static, Self::Output> {
        let receiver = self.receiver;

        Box::pin(iced::futures::stream::unfold(receiver, |rx| async move {
            loop {
                let received = match rx.lock() {
                    Ok(r) => r.try_recv().ok(),
                    Err(_) => {
                        log::warn!("keyboard subscription: receiver lock poisoned, stopping");
                        return None;
                    }
                };
                if let Some(event) = received {
                    return Some((event, rx));
                }

                // Notifications are rare; poll gently
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        }))
    }
}

/// Subscription yielding every keyboard notification sent on the channel
pub fn keyboard_subscription(receiver: KeyboardReceiver) -> Subscription<KeyboardEvent> {
    let id = Arc::as_ptr(&receiver) as u64;
    subscription::from_recipe(KeyboardRecipe { id, receiver })
}

/// Frame clock for modal animations
///
/// Ticks every `FRAME_INTERVAL` while `active`, otherwise stays silent so an
/// idle UI does not redraw.
pub fn frame_ticks(active: bool) -> Subscription<()> {
    if active {
        time::every(FRAME_INTERVAL).map(|_| ())
    } else {
        Subscription::none()
    }
}
