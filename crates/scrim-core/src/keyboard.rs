//! On-screen keyboard notifications
//!
//! The platform reports when its keyboard appears or disappears. Modals that
//! care subscribe through `KeyboardListeners` on mount and release their
//! handles on unmount; the host routes each notification to the current
//! subscribers only.

use crate::modal::ModalId;

/// Platform keyboard notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardEvent {
    /// The keyboard finished appearing
    DidShow,
    /// The keyboard finished disappearing
    DidHide,
}

/// Subscription handle returned by `KeyboardListeners::add_listener`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    id: u64,
    event: KeyboardEvent,
}

impl ListenerHandle {
    /// Which notification this handle listens for
    pub fn event(&self) -> KeyboardEvent {
        self.event
    }
}

/// The show/hide pair a modal holds while mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardSubscriptions {
    pub show: ListenerHandle,
    pub hide: ListenerHandle,
}

/// Registry of keyboard notification subscribers
#[derive(Debug, Default)]
pub struct KeyboardListeners {
    next_id: u64,
    listeners: Vec<(ListenerHandle, ModalId)>,
}

impl KeyboardListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `owner` to `event`
    pub fn add_listener(&mut self, event: KeyboardEvent, owner: ModalId) -> ListenerHandle {
        let handle = ListenerHandle {
            id: self.next_id,
            event,
        };
        self.next_id += 1;
        self.listeners.push((handle, owner));
        log::debug!("keyboard: modal {} subscribed to {:?}", owner, event);
        handle
    }

    /// Release a subscription, returning false if it was already gone
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() != before
    }

    /// Subscribers for `event`, in subscription order
    pub fn recipients(&self, event: KeyboardEvent) -> Vec<ModalId> {
        self.listeners
            .iter()
            .filter(|(h, _)| h.event == event)
            .map(|(_, owner)| *owner)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Platform side of the keyboard: the only action a modal ever requests
pub trait KeyboardPlatform {
    /// Ask the platform to put the keyboard away
    fn dismiss(&mut self);
}
