//! Scrim Demo - exercises every modal operation in a desktop window
//!
//! 1. **Dialogs**: a one-shot confirmation (cleared on close) and a rename
//!    dialog whose draft survives hide/show cycles.
//!
//! 2. **Notices**: a second modal slot stacked above the first.
//!
//! 3. **Soft keyboard**: a simulated on-screen keyboard, so backdrop taps
//!    behave as they would on a touch device.

pub mod config;
pub mod ui;
