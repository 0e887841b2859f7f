//! Hardware input events and their delivery channel.
//!
//! This module defines [`HardwareEvent`], the only input that drives the
//! [`crate::EventRouter`].
//!
//! Events originate from independent producers (button lines, the rotary
//! encoder). Each producer holds an [`EventPublisher`]; all of them feed one
//! FIFO channel drained by a single [`EventSubscription`], so the router sees
//! one ordered stream.

use std::fmt;

use tokio::sync::mpsc;

/// Push button integrated into the rotary encoder.
pub const ROTARY_BUTTON: &str = "rotary_button";

/// First auxiliary push button.
pub const BUTTON_1: &str = "button_1";

/// Second auxiliary push button.
pub const BUTTON_2: &str = "button_2";

/// Name of a physical push button.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonId(String);

impl ButtonId {
    /// Create a button id from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The rotary encoder's push button.
    pub fn rotary() -> Self {
        Self::new(ROTARY_BUTTON)
    }

    /// Button name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ButtonId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One detent of the rotary encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Step `+1`, moves the selection down the list.
    Clockwise,
    /// Step `-1`, moves the selection up the list.
    CounterClockwise,
}

impl Rotation {
    /// Interpret a raw encoder step. Only `+1` and `-1` are valid.
    pub fn from_step(step: i8) -> Option<Self> {
        match step {
            1 => Some(Self::Clockwise),
            -1 => Some(Self::CounterClockwise),
            _ => None,
        }
    }

    /// Raw step value.
    pub fn step(self) -> i8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Input produced by the hardware layer. Consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardwareEvent {
    /// A push button was pressed.
    ButtonPress {
        /// Which button.
        button: ButtonId,
    },

    /// The encoder moved one detent.
    EncoderRotate {
        /// Direction of travel.
        direction: Rotation,
    },
}

impl HardwareEvent {
    /// Press of the named button.
    pub fn press(button: impl Into<String>) -> Self {
        Self::ButtonPress { button: ButtonId::new(button) }
    }

    /// One clockwise detent.
    pub fn clockwise() -> Self {
        Self::EncoderRotate { direction: Rotation::Clockwise }
    }

    /// One counter-clockwise detent.
    pub fn counter_clockwise() -> Self {
        Self::EncoderRotate { direction: Rotation::CounterClockwise }
    }
}

/// Producer side of the hardware event stream.
///
/// Cheap to clone; hand one to every input source.
#[derive(Debug, Clone)]
pub struct EventPublisher {
    tx: mpsc::Sender<HardwareEvent>,
}

impl EventPublisher {
    /// Publish an event, waiting for buffer space.
    ///
    /// Returns `false` once the subscription has been dropped.
    pub async fn publish(&self, event: HardwareEvent) -> bool {
        self.tx.send(event).await.is_ok()
    }

    /// Publish without waiting. Drops the event when the buffer is full.
    ///
    /// For interrupt-style producers that must not block.
    pub fn try_publish(&self, event: HardwareEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(event)) => {
                tracing::warn!(?event, "Event buffer full, dropping input");
                false
            },
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }
}

/// The single consumer of the hardware event stream.
#[derive(Debug)]
pub struct EventSubscription {
    rx: mpsc::Receiver<HardwareEvent>,
}

impl EventSubscription {
    /// Next event in arrival order. `None` once every publisher is gone.
    pub async fn recv(&mut self) -> Option<HardwareEvent> {
        self.rx.recv().await
    }
}

/// Create a bounded FIFO channel with one subscriber.
pub fn event_channel(capacity: usize) -> (EventPublisher, EventSubscription) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (EventPublisher { tx }, EventSubscription { rx })
}
