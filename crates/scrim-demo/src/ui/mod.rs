//! iced front-end for the modal playground

pub mod app;
pub mod dialogs;
pub mod message;
pub mod soft_keyboard;

pub use app::ScrimDemoApp;
pub use message::Message;
