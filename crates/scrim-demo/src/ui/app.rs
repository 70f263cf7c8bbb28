//! Main application state and iced implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Instant;

use iced::widget::{button, column, container, row, text, Space};
use iced::{event, keyboard, Alignment, Element, Length, Subscription, Task, Theme};
use scrim_core::{
    Contents, Dismissal, KeyboardPlatform, Modal, ModalConfig, ModalEvent, ModalHost, ModalId,
};
use scrim_widgets::{
    backdrop_color, dialog_button, frame_ticks, keyboard_subscription, modal_view, with_modals,
    ACCENT_BG, NEUTRAL_BG,
};

use super::dialogs::{self, Dialog};
use super::message::Message;
use super::soft_keyboard::SoftKeyboard;
use crate::config::{self, DemoConfig};

/// Slot for dialogs
pub const DIALOG_SLOT: ModalId = 0;
/// Slot for notices, drawn above dialogs
pub const NOTICE_SLOT: ModalId = 1;

/// Main application
pub struct ScrimDemoApp {
    host: ModalHost<Dialog>,
    keyboard: SoftKeyboard,
    config: DemoConfig,
    config_path: PathBuf,
    /// Name edited by the rename dialog
    document_name: String,
    /// Number of completed closes, bumped from close callbacks
    closes: Arc<AtomicU32>,
    status: String,
}

impl ScrimDemoApp {
    /// Create a new application instance
    pub fn new(config: DemoConfig, config_path: PathBuf) -> (Self, Task<Message>) {
        let mut host = ModalHost::new();
        for (id, modal_config) in [
            (DIALOG_SLOT, config.dialog.clone()),
            (NOTICE_SLOT, config.notice.clone()),
        ] {
            if let Err(e) = host.create(id, modal_config) {
                log::error!("Failed to create modal {}: {}", id, e);
            }
        }

        let app = Self {
            host,
            keyboard: SoftKeyboard::new(),
            config,
            config_path,
            document_name: String::from("Untitled"),
            closes: Arc::new(AtomicU32::new(0)),
            status: String::from("Ready"),
        };

        (app, Task::none())
    }

    pub fn host(&self) -> &ModalHost<Dialog> {
        &self.host
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn close_count(&self) -> u32 {
        self.closes.load(Ordering::Relaxed)
    }

    pub fn keyboard(&self) -> &SoftKeyboard {
        &self.keyboard
    }

    /// Run `f` on modal `id`, reporting lookup failures in the status line
    fn with_modal<F>(&mut self, id: ModalId, f: F)
    where
        F: FnOnce(&mut Modal<Dialog>),
    {
        match self.host.get_mut(id) {
            Ok(modal) => f(modal),
            Err(e) => {
                log::error!("{}", e);
                self.status = e.to_string();
            }
        }
    }

    /// Close callback that counts completed closes
    fn count_close(&self, what: &'static str) -> impl FnMut() + Send + 'static {
        let closes = self.closes.clone();
        move || {
            let total = closes.fetch_add(1, Ordering::Relaxed) + 1;
            log::info!("{} closed ({} closes so far)", what, total);
        }
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        match message {
            // Opening modals
            Message::OpenConfirm => {
                let contents = Contents::new(Dialog::confirm(
                    "Delete draft?",
                    "The draft will be gone for good.",
                ))
                .on_close(self.count_close("confirm"));
                self.with_modal(DIALOG_SLOT, |modal| modal.show_contents(contents, now));
            }
            Message::OpenRename => {
                let contents = Contents::new(Dialog::Rename {
                    draft: self.document_name.clone(),
                })
                .on_close(self.count_close("rename"))
                .keep_on_close();
                self.with_modal(DIALOG_SLOT, |modal| modal.show_contents(contents, now));
            }
            Message::ReopenRename => {
                self.with_modal(DIALOG_SLOT, |modal| modal.show(now));
            }
            Message::OpenNotice => {
                let contents = Contents::new(Dialog::notice(format!(
                    "\"{}\" has {} completed closes.",
                    self.document_name,
                    self.close_count()
                )))
                .on_close(self.count_close("notice"));
                self.with_modal(NOTICE_SLOT, |modal| modal.show_contents(contents, now));
            }

            // Dialog actions
            Message::ConfirmAccepted => {
                self.status = String::from("Draft deleted");
                self.with_modal(DIALOG_SLOT, |modal| modal.hide(now));
                let contents = Contents::new(Dialog::notice("Draft deleted."))
                    .on_close(self.count_close("notice"));
                self.with_modal(NOTICE_SLOT, |modal| modal.show_contents(contents, now));
            }
            Message::Close(id) => {
                self.with_modal(id, |modal| modal.hide(now));
            }
            Message::Backdrop(id) => {
                match self.host.backdrop_dismiss(id, now, &mut self.keyboard) {
                    Ok(Dismissal::Hide) => log::debug!("Backdrop {}: hiding", id),
                    Ok(Dismissal::DismissKeyboard) => {
                        self.status = String::from("Keyboard dismissed, tap again to close");
                    }
                    Err(e) => {
                        log::error!("Backdrop {}: {}", id, e);
                        self.status = e.to_string();
                    }
                }
            }
            Message::RenameChanged(value) => {
                self.keyboard.raise();
                self.with_modal(DIALOG_SLOT, |modal| {
                    if let Dialog::Rename { draft } = modal.content_mut() {
                        *draft = value;
                    }
                });
            }
            Message::RenameSubmitted => {
                let draft = self
                    .host
                    .get(DIALOG_SLOT)
                    .ok()
                    .and_then(|modal| match modal.content() {
                        Dialog::Rename { draft } => Some(draft.trim().to_string()),
                        _ => None,
                    });
                match draft {
                    Some(name) if !name.is_empty() => {
                        log::info!("Renamed '{}' -> '{}'", self.document_name, name);
                        self.status = format!("Renamed to {}", name);
                        self.document_name = name;
                        self.keyboard.dismiss();
                        self.with_modal(DIALOG_SLOT, |modal| modal.hide(now));
                    }
                    Some(_) => {
                        self.status = String::from("Please enter a name");
                    }
                    None => log::warn!("RenameSubmitted without a rename dialog"),
                }
            }

            // Keyboard
            Message::Keyboard(event) => {
                log::debug!("Keyboard notification: {:?}", event);
                self.host.dispatch_keyboard(event);
            }
            Message::DismissKeyboard => {
                self.keyboard.dismiss();
            }
            Message::EscapePressed => {
                let top = self
                    .host
                    .iter()
                    .filter(|modal| modal.is_visible())
                    .map(Modal::id)
                    .last();
                if let Some(id) = top {
                    self.with_modal(id, |modal| modal.hide(now));
                }
            }

            // Config
            Message::SaveConfig => {
                let config = self.config.clone();
                let path = self.config_path.clone();
                return Task::perform(
                    async move { config::save_config(&config, &path).map_err(|e| e.to_string()) },
                    Message::SaveConfigComplete,
                );
            }
            Message::SaveConfigComplete(result) => match result {
                Ok(()) => {
                    log::info!("Config saved to {:?}", self.config_path);
                    self.status = format!("Saved {}", self.config_path.display());
                }
                Err(e) => {
                    log::error!("Failed to save config: {}", e);
                    self.status = format!("Failed to save: {}", e);
                }
            },

            // Misc
            Message::Frame => self.advance(now),
        }

        Task::none()
    }

    /// Advance modal animations to `now`
    pub fn advance(&mut self, now: Instant) {
        for (id, event) in self.host.tick(now) {
            match event {
                ModalEvent::Shown => log::debug!("Modal {} shown", id),
                ModalEvent::Closed => {
                    self.status = format!("Closed modal {} ({} closes)", id, self.close_count());
                }
            }
        }
    }

    fn modal_config(&self, id: ModalId) -> &ModalConfig {
        if id == NOTICE_SLOT {
            &self.config.notice
        } else {
            &self.config.dialog
        }
    }

    /// Render the UI
    pub fn view(&self) -> Element<'_, Message> {
        let base: Element<Message> = container(self.view_main())
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into();

        let mut layers: Vec<Element<Message>> = self
            .host
            .iter()
            .filter_map(|modal| modal.frame())
            .map(|frame| {
                let color = backdrop_color(&self.modal_config(frame.id).backdrop);
                modal_view(
                    frame,
                    color,
                    |dialog| dialogs::view(dialog, frame.id),
                    Message::Backdrop(frame.id),
                )
            })
            .collect();

        if self.keyboard.is_visible() {
            layers.push(self.view_soft_keyboard());
        }

        with_modals(base, layers)
    }

    fn view_main(&self) -> Element<'_, Message> {
        let action = |label: &'static str, message: Message| {
            button(text(label))
                .on_press(message)
                .width(Length::Fill)
                .style(|_theme, status| dialog_button(status, NEUTRAL_BG))
        };

        let save_btn = button(text("Save config"))
            .on_press(Message::SaveConfig)
            .style(|_theme, status| dialog_button(status, ACCENT_BG));

        column![
            row![text("scrim").size(24), Space::new().width(Length::Fill), save_btn]
                .align_y(Alignment::Center),
            text(format!("Document: {}", self.document_name)).size(16),
            action("Delete draft…", Message::OpenConfirm),
            action("Rename…", Message::OpenRename),
            action("Reopen rename (keeps draft)", Message::ReopenRename),
            action("Show notice", Message::OpenNotice),
            Space::new().height(Length::Fill),
            text(format!("{}  ·  closes: {}", self.status, self.close_count())).size(12),
        ]
        .spacing(12)
        .into()
    }

    /// Bottom-docked fake keyboard drawn above every modal
    fn view_soft_keyboard(&self) -> Element<'_, Message> {
        let keys: Vec<Element<'_, Message>> = ["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"]
            .into_iter()
            .map(|key| text(key).size(18).width(Length::Fill).into())
            .collect();
        let keys = row(keys).spacing(4);

        let done_btn = button(text("Done"))
            .on_press(Message::DismissKeyboard)
            .style(|_theme, status| dialog_button(status, ACCENT_BG));

        let panel = container(
            column![keys, row![Space::new().width(Length::Fill), done_btn]].spacing(8),
        )
        .width(Length::Fill)
        .padding(12)
        .style(|_theme| scrim_widgets::card_style());

        column![Space::new().height(Length::Fill), panel]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Keyboard notifications, Escape, and animation frames while moving
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard_subscription(self.keyboard.receiver()).map(Message::Keyboard),
            frame_ticks(self.host.is_animating()).map(|_| Message::Frame),
            event::listen_with(escape_pressed),
        ])
    }
}

fn escape_pressed(
    event: iced::Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}
