//! Fixed-capacity modal host
//!
//! The application root builds one `ModalHost` and hands it (or `&mut` to it)
//! to whatever needs to open a modal. Modals live in numbered slots; a new
//! registration in an occupied slot replaces the previous modal.
//!
//! The host also owns the keyboard listener registry, so platform keyboard
//! notifications reach exactly the modals that are currently mounted.

use std::time::Instant;

use crate::config::ModalConfig;
use crate::error::{ModalError, ModalResult};
use crate::keyboard::{KeyboardEvent, KeyboardListeners, KeyboardPlatform};
use crate::modal::{Dismissal, Modal, ModalEvent, ModalId};

/// Default number of modal slots
pub const MODAL_SLOTS: usize = 2;

/// Registry of modal instances indexed by small integer id
pub struct ModalHost<C, const N: usize = MODAL_SLOTS> {
    slots: [Option<Modal<C>>; N],
    keyboard: KeyboardListeners,
}

impl<C: Default, const N: usize> ModalHost<C, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            keyboard: KeyboardListeners::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    fn check(&self, id: ModalId) -> ModalResult<()> {
        if id >= N {
            return Err(ModalError::SlotOutOfRange { id, capacity: N });
        }
        Ok(())
    }

    /// Place `modal` in the slot named by its id
    ///
    /// Returns the modal it replaced, already unmounted.
    pub fn register(&mut self, modal: Modal<C>) -> ModalResult<Option<Modal<C>>> {
        let id = modal.id();
        self.check(id)?;

        let mut previous = self.slots[id].replace(modal);
        if let Some(old) = previous.as_mut() {
            log::info!("modal host: slot {} replaced", id);
            old.unmount(&mut self.keyboard);
        }
        Ok(previous)
    }

    /// Construct, register, and mount a modal in one step
    pub fn create(&mut self, id: ModalId, config: ModalConfig) -> ModalResult<&mut Modal<C>> {
        self.register(Modal::new(id, config))?;
        self.mount(id)?;
        self.get_mut(id)
    }

    /// Attach the modal's keyboard listeners
    pub fn mount(&mut self, id: ModalId) -> ModalResult<()> {
        self.check(id)?;
        let modal = self.slots[id].as_mut().ok_or(ModalError::NotRegistered(id))?;
        modal.mount(&mut self.keyboard);
        Ok(())
    }

    /// Detach the modal's keyboard listeners; it stays registered
    pub fn unmount(&mut self, id: ModalId) -> ModalResult<()> {
        self.check(id)?;
        let modal = self.slots[id].as_mut().ok_or(ModalError::NotRegistered(id))?;
        modal.unmount(&mut self.keyboard);
        Ok(())
    }

    pub fn get(&self, id: ModalId) -> ModalResult<&Modal<C>> {
        self.check(id)?;
        self.slots[id].as_ref().ok_or(ModalError::NotRegistered(id))
    }

    pub fn get_mut(&mut self, id: ModalId) -> ModalResult<&mut Modal<C>> {
        self.check(id)?;
        self.slots[id].as_mut().ok_or(ModalError::NotRegistered(id))
    }

    /// Route a platform keyboard notification to subscribed modals
    pub fn dispatch_keyboard(&mut self, event: KeyboardEvent) {
        for id in self.keyboard.recipients(event) {
            if let Some(modal) = self.slots.get_mut(id).and_then(Option::as_mut) {
                modal.on_keyboard(event);
            }
        }
    }

    /// Advance every modal to `now`, collecting completed transitions
    pub fn tick(&mut self, now: Instant) -> Vec<(ModalId, ModalEvent)> {
        self.slots
            .iter_mut()
            .flatten()
            .filter_map(|modal| modal.tick(now).map(|event| (modal.id(), event)))
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        self.iter().any(Modal::is_animating)
    }

    /// Backdrop tap on modal `id`, dismissing the keyboard through
    /// `platform` when that is what the tap means
    pub fn backdrop_dismiss<P>(
        &mut self,
        id: ModalId,
        now: Instant,
        platform: &mut P,
    ) -> ModalResult<Dismissal>
    where
        P: KeyboardPlatform + ?Sized,
    {
        let dismissal = self.get_mut(id)?.backdrop_dismiss(now);
        if dismissal == Dismissal::DismissKeyboard {
            platform.dismiss();
        }
        Ok(dismissal)
    }

    /// Registered modals in id order
    pub fn iter(&self) -> impl Iterator<Item = &Modal<C>> {
        self.slots.iter().flatten()
    }

    pub fn keyboard_listeners(&self) -> &KeyboardListeners {
        &self.keyboard
    }
}

impl<C: Default, const N: usize> Default for ModalHost<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: std::fmt::Debug, const N: usize> std::fmt::Debug for ModalHost<C, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalHost")
            .field("slots", &self.slots)
            .field("keyboard", &self.keyboard)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingKeyboard {
        dismissed: usize,
    }

    impl KeyboardPlatform for RecordingKeyboard {
        fn dismiss(&mut self) {
            self.dismissed += 1;
        }
    }

    fn host() -> ModalHost<u32> {
        let mut host = ModalHost::new();
        host.create(0, ModalConfig::default()).unwrap();
        host.create(1, ModalConfig::default()).unwrap();
        host
    }

    #[test]
    fn test_lookup_errors() {
        let mut host: ModalHost<u32> = ModalHost::new();
        assert_eq!(host.capacity(), MODAL_SLOTS);
        assert_eq!(host.get(0).unwrap_err(), ModalError::NotRegistered(0));
        assert_eq!(
            host.get_mut(2).unwrap_err(),
            ModalError::SlotOutOfRange { id: 2, capacity: 2 }
        );
        assert!(host.register(Modal::new(5, ModalConfig::default())).is_err());
    }

    #[test]
    fn test_register_is_last_writer_wins() {
        let mut host = host();
        assert_eq!(host.keyboard_listeners().len(), 4);

        *host.get_mut(0).unwrap().content_mut() = 7;
        let replaced = host.register(Modal::new(0, ModalConfig::default())).unwrap();

        let old = replaced.unwrap();
        assert_eq!(*old.content(), 7);
        assert!(!old.is_mounted());
        assert_eq!(*host.get(0).unwrap().content(), 0);
        // The replaced modal's listeners were released; the new one is not mounted yet
        assert_eq!(host.keyboard_listeners().len(), 2);
    }

    #[test]
    fn test_keyboard_reaches_mounted_modals_only() {
        let mut host = host();
        host.unmount(1).unwrap();

        host.dispatch_keyboard(KeyboardEvent::DidShow);
        assert!(host.get(0).unwrap().keyboard_visible());
        assert!(!host.get(1).unwrap().keyboard_visible());

        host.dispatch_keyboard(KeyboardEvent::DidHide);
        assert!(!host.get(0).unwrap().keyboard_visible());
    }

    #[test]
    fn test_backdrop_dismiss_calls_platform() {
        let t0 = Instant::now();
        let mut host = host();
        let mut keyboard = RecordingKeyboard::default();
        host.get_mut(0).unwrap().show(t0);
        host.tick(t0 + Duration::from_millis(200));

        host.dispatch_keyboard(KeyboardEvent::DidShow);
        let first = host.backdrop_dismiss(0, t0 + Duration::from_millis(300), &mut keyboard);
        assert_eq!(first, Ok(Dismissal::DismissKeyboard));
        assert_eq!(keyboard.dismissed, 1);
        assert!(!host.get(0).unwrap().is_animating());

        host.dispatch_keyboard(KeyboardEvent::DidHide);
        let second = host.backdrop_dismiss(0, t0 + Duration::from_millis(400), &mut keyboard);
        assert_eq!(second, Ok(Dismissal::Hide));
        assert_eq!(keyboard.dismissed, 1);
        assert!(host.get(0).unwrap().is_animating());
    }

    #[test]
    fn test_remount_after_missed_keyboard_hide() {
        let t0 = Instant::now();
        let mut host = host();
        let mut keyboard = RecordingKeyboard::default();

        host.dispatch_keyboard(KeyboardEvent::DidShow);
        host.unmount(0).unwrap();
        // Keyboard goes away while modal 0 is not listening
        host.dispatch_keyboard(KeyboardEvent::DidHide);
        host.mount(0).unwrap();

        host.get_mut(0).unwrap().show(t0);
        host.tick(t0 + Duration::from_millis(200));

        let dismissal = host.backdrop_dismiss(0, t0 + Duration::from_millis(300), &mut keyboard);
        assert_eq!(dismissal, Ok(Dismissal::Hide));
        assert_eq!(keyboard.dismissed, 0);
        assert!(!host.get(0).unwrap().keyboard_visible());
    }

    #[test]
    fn test_tick_reports_per_modal_events() {
        let t0 = Instant::now();
        let mut host = host();
        host.get_mut(1).unwrap().show(t0);
        assert!(host.is_animating());

        let events = host.tick(t0 + Duration::from_millis(250));
        assert_eq!(events, vec![(1, ModalEvent::Shown)]);
        assert!(!host.is_animating());
        assert_eq!(host.iter().filter(|m| m.is_visible()).count(), 1);
    }
}
