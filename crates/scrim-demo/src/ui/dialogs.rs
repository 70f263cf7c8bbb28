//! Dialog contents shown inside the modals
//!
//! `Dialog` is the content type stored in each modal. `Dialog::Empty` is what
//! a modal holds after its contents are reset.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Color, Element, Length};
use scrim_core::ModalId;
use scrim_widgets::{card_style, dialog_button, ACCENT_BG, DANGER_BG, NEUTRAL_BG};

use super::message::Message;

/// Width of a dialog card
const CARD_WIDTH: f32 = 360.0;

/// Content of a modal
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    /// Nothing to show
    #[default]
    Empty,
    /// Yes/no confirmation
    Confirm { title: String, body: String },
    /// Text field for renaming the sample document
    Rename { draft: String },
    /// Short informational message
    Notice { text: String },
}

impl Dialog {
    pub fn confirm(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Confirm {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self::Notice { text: text.into() }
    }

    /// Short label for logs and the status line
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Confirm { .. } => "confirm",
            Self::Rename { .. } => "rename",
            Self::Notice { .. } => "notice",
        }
    }
}

/// Render the dialog held by modal `id`
pub fn view(dialog: &Dialog, id: ModalId) -> Element<'_, Message> {
    let body: Element<'_, Message> = match dialog {
        Dialog::Empty => return Space::new().into(),
        Dialog::Confirm { title, body } => view_confirm(title, body, id),
        Dialog::Rename { draft } => view_rename(draft, id),
        Dialog::Notice { text: message } => view_notice(message, id),
    };

    container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(20)
        .style(|_theme| card_style())
        .into()
}

fn header(title: &str, id: ModalId) -> Element<'_, Message> {
    let close_btn = button(text("×").size(20))
        .on_press(Message::Close(id))
        .style(|_theme, status| dialog_button(status, NEUTRAL_BG));

    row![
        text(title).size(22),
        Space::new().width(Length::Fill),
        close_btn
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn view_confirm<'a>(title: &'a str, body: &'a str, id: ModalId) -> Element<'a, Message> {
    let cancel_btn = button(text("Cancel"))
        .on_press(Message::Close(id))
        .style(|_theme, status| dialog_button(status, NEUTRAL_BG));
    let confirm_btn = button(text("Delete"))
        .on_press(Message::ConfirmAccepted)
        .style(|_theme, status| dialog_button(status, DANGER_BG));

    column![
        header(title, id),
        text(body).size(15),
        row![Space::new().width(Length::Fill), cancel_btn, confirm_btn].spacing(10),
    ]
    .spacing(16)
    .into()
}

fn view_rename(draft: &str, id: ModalId) -> Element<'_, Message> {
    let input = text_input("New name", draft)
        .on_input(Message::RenameChanged)
        .on_submit(Message::RenameSubmitted)
        .padding(8);

    let save_btn = button(text("Save"))
        .on_press(Message::RenameSubmitted)
        .style(|_theme, status| dialog_button(status, ACCENT_BG));

    let hint = text("Tap outside once to hide the keyboard, twice to close.")
        .size(12)
        .color(Color::from_rgb(0.6, 0.6, 0.6));

    column![
        header("Rename", id),
        input,
        hint,
        row![Space::new().width(Length::Fill), save_btn],
    ]
    .spacing(12)
    .into()
}

fn view_notice(message: &str, id: ModalId) -> Element<'_, Message> {
    let ok_btn = button(text("OK"))
        .on_press(Message::Close(id))
        .style(|_theme, status| dialog_button(status, ACCENT_BG));

    column![text(message).size(16), row![Space::new().width(Length::Fill), ok_btn]]
        .spacing(12)
        .into()
}
