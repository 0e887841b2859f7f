//! Error types for the navigation core.
//!
//! Neither type escapes [`crate::EventRouter::handle`]: navigation errors are
//! logged and leave the UI unchanged, device errors are normalized into a
//! failed [`crate::CommandResult`] by the adapter.

use std::time::Duration;

use thiserror::Error;

use crate::HandlerKey;

/// Errors raised while resolving or applying a transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No transition registered for the `(context, action)` pair.
    #[error("handler function [{0}] not found")]
    HandlerNotFound(HandlerKey),

    /// A return transition found no history to pop.
    #[error("context stack is empty")]
    EmptyContextStack,
}

/// Errors from the remote device-control collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The call did not complete in time.
    #[error("remote call timed out after {0:?}")]
    Timeout(Duration),

    /// Lower-level transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}
