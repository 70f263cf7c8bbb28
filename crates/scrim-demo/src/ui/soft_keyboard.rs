//! Simulated on-screen keyboard
//!
//! Desktop windows have no soft keyboard, so the demo fakes one: it "slides
//! up" when the user types into a dialog field and goes away on submit, on
//! the "Done" key, or when a modal asks the platform to dismiss it. Every
//! change is announced on the keyboard notification channel, exactly like a
//! mobile platform bridge would.

use std::sync::mpsc::Sender;

use scrim_core::{KeyboardEvent, KeyboardPlatform};
use scrim_widgets::{keyboard_channel, KeyboardReceiver};

pub struct SoftKeyboard {
    visible: bool,
    sender: Sender<KeyboardEvent>,
    receiver: KeyboardReceiver,
}

impl SoftKeyboard {
    pub fn new() -> Self {
        let (sender, receiver) = keyboard_channel();
        Self {
            visible: false,
            sender,
            receiver,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Receiver to hand to `keyboard_subscription`
    pub fn receiver(&self) -> KeyboardReceiver {
        self.receiver.clone()
    }

    /// Bring the keyboard up (no-op if already up)
    pub fn raise(&mut self) {
        if !self.visible {
            self.visible = true;
            self.notify(KeyboardEvent::DidShow);
        }
    }

    fn notify(&self, event: KeyboardEvent) {
        if let Err(e) = self.sender.send(event) {
            log::warn!("soft keyboard: failed to send {:?}: {}", event, e);
        }
    }
}

impl Default for SoftKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardPlatform for SoftKeyboard {
    fn dismiss(&mut self) {
        if self.visible {
            self.visible = false;
            self.notify(KeyboardEvent::DidHide);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(keyboard: &SoftKeyboard) -> Vec<KeyboardEvent> {
        let receiver = keyboard.receiver();
        let rx = receiver.lock().unwrap();
        rx.try_iter().collect()
    }

    #[test]
    fn test_raise_and_dismiss_notify_once() {
        let mut keyboard = SoftKeyboard::new();
        keyboard.raise();
        keyboard.raise();
        assert!(keyboard.is_visible());

        keyboard.dismiss();
        keyboard.dismiss();
        assert!(!keyboard.is_visible());

        assert_eq!(
            drain(&keyboard),
            vec![KeyboardEvent::DidShow, KeyboardEvent::DidHide]
        );
    }

    #[test]
    fn test_dismiss_while_hidden_is_silent() {
        let mut keyboard = SoftKeyboard::new();
        keyboard.dismiss();
        assert!(drain(&keyboard).is_empty());
    }
}
