//! Back-navigation history.

use crate::{InfoObject, NavigationError};

/// Stack of context objects pushed by forward transitions.
///
/// Frames may be `None` when a forward transition had no context to save;
/// the frame still counts so that every push is matched by one pop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextStack {
    frames: Vec<Option<InfoObject>>,
}

impl ContextStack {
    /// Empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a context for the matching return transition.
    pub fn push(&mut self, context: Option<InfoObject>) {
        self.frames.push(context);
    }

    /// Remove the most recent frame.
    ///
    /// Popping an empty stack means a return transition was reached without
    /// its forward push; the caller decides how to recover.
    pub fn pop(&mut self) -> Result<Option<InfoObject>, NavigationError> {
        self.frames.pop().ok_or(NavigationError::EmptyContextStack)
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Most recent frame.
    pub fn peek(&self) -> Option<&InfoObject> {
        self.frames.last().and_then(Option::as_ref)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when no frames are held.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
