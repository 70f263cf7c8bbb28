//! Caller-supplied modal contents

/// Callback run once each time a hide animation completes
pub type OnClose = Box<dyn FnMut() + Send>;

pub(crate) fn noop() -> OnClose {
    Box::new(|| {})
}

/// Content, close callback, and cleanup policy handed to a modal together
///
/// ```ignore
/// modal.show_contents(
///     Contents::new(Dialog::Confirm).on_close(|| log::info!("closed")),
///     Instant::now(),
/// );
/// ```
pub struct Contents<C> {
    pub(crate) content: C,
    pub(crate) on_close: OnClose,
    pub(crate) unregister_on_close: bool,
}

impl<C> Contents<C> {
    /// Contents with a no-op close callback, cleared after the next close
    pub fn new(content: C) -> Self {
        Self {
            content,
            on_close: noop(),
            unregister_on_close: true,
        }
    }

    pub fn on_close<F>(mut self, on_close: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_close = Box::new(on_close);
        self
    }

    /// Whether content and callback are reset after a completed hide
    pub fn unregister_on_close(mut self, unregister: bool) -> Self {
        self.unregister_on_close = unregister;
        self
    }

    /// Keep content and callback across hide/show cycles
    pub fn keep_on_close(self) -> Self {
        self.unregister_on_close(false)
    }

    pub fn content(&self) -> &C {
        &self.content
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Contents<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Contents")
            .field("content", &self.content)
            .field("unregister_on_close", &self.unregister_on_close)
            .finish_non_exhaustive()
    }
}

impl<C: Default> Default for Contents<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}
