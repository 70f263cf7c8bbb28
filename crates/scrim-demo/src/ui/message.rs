//! Application messages

use scrim_core::{KeyboardEvent, ModalId};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Opening modals
    OpenConfirm,
    OpenRename,
    /// Show the rename dialog again without replacing its contents
    ReopenRename,
    OpenNotice,

    // Dialog actions
    ConfirmAccepted,
    Close(ModalId),
    /// Press on the backdrop of modal `ModalId`
    Backdrop(ModalId),
    RenameChanged(String),
    RenameSubmitted,

    // Keyboard
    /// Platform keyboard notification
    Keyboard(KeyboardEvent),
    /// "Done" on the soft keyboard
    DismissKeyboard,
    EscapePressed,

    // Config
    SaveConfig,
    SaveConfigComplete(Result<(), String>),

    // Misc
    /// Animation frame
    Frame,
}
