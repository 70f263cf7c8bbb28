//! End-to-end modal scenarios driven through the host with a fixed clock

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use scrim_core::{
    Contents, Dismissal, KeyboardEvent, KeyboardPlatform, ModalConfig, ModalEvent, ModalHost,
    Phase,
};

#[derive(Debug, Clone, Default, PartialEq)]
enum Dialog {
    #[default]
    Empty,
    Confirm(String),
    Rename(String),
}

#[derive(Default)]
struct FakeKeyboard {
    up: bool,
    dismiss_requests: usize,
}

impl KeyboardPlatform for FakeKeyboard {
    fn dismiss(&mut self) {
        self.dismiss_requests += 1;
        self.up = false;
    }
}

/// Test clock advancing in whole milliseconds
struct Clock {
    start: Instant,
    elapsed: u64,
}

impl Clock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: 0,
        }
    }

    fn now(&self) -> Instant {
        self.start + Duration::from_millis(self.elapsed)
    }

    fn advance(&mut self, ms: u64) -> Instant {
        self.elapsed += ms;
        self.now()
    }
}

fn host() -> ModalHost<Dialog> {
    let mut host = ModalHost::new();
    host.create(0, ModalConfig::default()).unwrap();
    host.create(1, ModalConfig::default()).unwrap();
    host
}

fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = count.clone();
    (count, move || {
        inner.fetch_add(1, Ordering::SeqCst);
    })
}

/// Tick in 16ms frames until the host goes idle, returning all events
fn settle(host: &mut ModalHost<Dialog>, clock: &mut Clock) -> Vec<(usize, ModalEvent)> {
    let mut events = Vec::new();
    while host.is_animating() {
        events.extend(host.tick(clock.advance(16)));
    }
    events
}

#[test]
fn one_shot_contents_are_cleared_after_close() {
    let mut host = host();
    let mut clock = Clock::new();
    let (closed, on_close) = counter();

    let modal = host.get_mut(0).unwrap();
    modal.set_contents(Contents::new(Dialog::Confirm("Delete?".into())).on_close(on_close));
    modal.show(clock.now());
    assert_eq!(settle(&mut host, &mut clock), vec![(0, ModalEvent::Shown)]);

    host.get_mut(0).unwrap().hide(clock.now());
    assert!(host.get(0).unwrap().is_visible());
    assert_eq!(settle(&mut host, &mut clock), vec![(0, ModalEvent::Closed)]);

    let modal = host.get(0).unwrap();
    assert!(!modal.is_visible());
    assert_eq!(modal.content(), &Dialog::Empty);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn kept_contents_survive_reopening() {
    let mut host = host();
    let mut clock = Clock::new();
    let (closed, on_close) = counter();

    host.get_mut(0).unwrap().show_contents(
        Contents::new(Dialog::Rename("draft".into()))
            .on_close(on_close)
            .keep_on_close(),
        clock.now(),
    );
    // Hide before the show finished
    host.tick(clock.advance(50));
    host.get_mut(0).unwrap().hide(clock.now());
    settle(&mut host, &mut clock);
    assert_eq!(closed.load(Ordering::SeqCst), 1);

    host.get_mut(0).unwrap().show(clock.now());
    settle(&mut host, &mut clock);
    assert_eq!(host.get(0).unwrap().content(), &Dialog::Rename("draft".into()));

    host.get_mut(0).unwrap().hide(clock.now());
    settle(&mut host, &mut clock);
    assert_eq!(closed.load(Ordering::SeqCst), 2);
    assert_eq!(host.get(0).unwrap().content(), &Dialog::Rename("draft".into()));
}

#[test]
fn visibility_follows_completed_hides_only() {
    let mut host = host();
    let mut clock = Clock::new();

    for _ in 0..3 {
        host.get_mut(1).unwrap().show(clock.now());
        assert!(host.get(1).unwrap().is_visible());
        host.tick(clock.advance(100));

        host.get_mut(1).unwrap().hide(clock.now());
        assert!(host.get(1).unwrap().is_visible());
        host.tick(clock.advance(100));
        assert!(host.get(1).unwrap().is_visible());

        settle(&mut host, &mut clock);
        assert!(!host.get(1).unwrap().is_visible());
    }
}

#[test]
fn backdrop_opacity_matches_scale_every_frame() {
    let mut host = host();
    let mut clock = Clock::new();

    host.get_mut(0).unwrap().show(clock.now());
    while host.is_animating() {
        host.tick(clock.advance(7));
        let frame = host.get(0).unwrap().frame().unwrap();
        assert!((frame.backdrop_opacity - frame.scale).abs() < 1e-6);
    }

    host.get_mut(0).unwrap().hide(clock.now());
    while host.is_animating() {
        host.tick(clock.advance(7));
        if let Some(frame) = host.get(0).unwrap().frame() {
            assert!((frame.backdrop_opacity - frame.scale).abs() < 1e-6);
        }
    }
}

#[test]
fn first_backdrop_tap_with_keyboard_up_only_dismisses_keyboard() {
    let mut host = host();
    let mut clock = Clock::new();
    let mut keyboard = FakeKeyboard::default();
    let (closed, on_close) = counter();

    host.get_mut(0)
        .unwrap()
        .show_contents(Contents::new(Dialog::Rename(String::new())).on_close(on_close), clock.now());
    settle(&mut host, &mut clock);

    keyboard.up = true;
    host.dispatch_keyboard(KeyboardEvent::DidShow);

    let first = host.backdrop_dismiss(0, clock.now(), &mut keyboard).unwrap();
    assert_eq!(first, Dismissal::DismissKeyboard);
    assert_eq!(keyboard.dismiss_requests, 1);
    assert!(!keyboard.up);
    assert_eq!(host.get(0).unwrap().phase(), Phase::Visible);

    // The platform confirms the keyboard went away
    host.dispatch_keyboard(KeyboardEvent::DidHide);

    let second = host.backdrop_dismiss(0, clock.now(), &mut keyboard).unwrap();
    assert_eq!(second, Dismissal::Hide);
    assert_eq!(keyboard.dismiss_requests, 1);
    settle(&mut host, &mut clock);
    assert_eq!(closed.load(Ordering::SeqCst), 1);
}

#[test]
fn close_callback_never_runs_during_show() {
    let mut host = host();
    let mut clock = Clock::new();
    let (closed, on_close) = counter();

    host.get_mut(1).unwrap().show_contents(
        Contents::new(Dialog::Confirm("Saved".into())).on_close(on_close),
        clock.now(),
    );
    settle(&mut host, &mut clock);
    // Showing again while visible restarts the grow-in without closing
    host.get_mut(1).unwrap().show(clock.now());
    settle(&mut host, &mut clock);

    assert_eq!(closed.load(Ordering::SeqCst), 0);
    assert!(host.get(1).unwrap().is_visible());
}

#[test]
fn modals_animate_independently() {
    let mut host = host();
    let mut clock = Clock::new();

    host.get_mut(0).unwrap().show(clock.now());
    host.tick(clock.advance(100));
    host.get_mut(1).unwrap().show(clock.now());

    let events = host.tick(clock.advance(100));
    assert_eq!(events, vec![(0, ModalEvent::Shown)]);
    let events = settle(&mut host, &mut clock);
    assert_eq!(events, vec![(1, ModalEvent::Shown)]);
    assert_eq!(host.iter().filter(|m| m.is_visible()).count(), 2);
}
