//! Modal host error types

use thiserror::Error;

use crate::modal::ModalId;

/// Errors returned when looking up or registering modals by id
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    /// Id does not fit in the host's fixed slot table
    #[error("Modal id {id} is outside the host (capacity {capacity})")]
    SlotOutOfRange { id: ModalId, capacity: usize },

    /// Slot exists but nothing has been registered in it
    #[error("No modal registered with id {0}")]
    NotRegistered(ModalId),
}

/// Result type for modal host operations
pub type ModalResult<T> = Result<T, ModalError>;
