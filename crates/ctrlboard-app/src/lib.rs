//! Control board navigation core
//!
//! Event-driven state machine behind the physical control panel: hardware
//! input events are resolved against the selected menu entry, routed through
//! a static transition table, and turned into navigation changes and commands
//! for the remote device manager.
//!
//! # Components
//!
//! - [`EventRouter`]: entry point, consumes one [`HardwareEvent`] at a time
//! - [`Transition`] / [`NavigationState`]: transition table and the owned
//!   navigation state (context stack + renderer)
//! - [`DeviceActionAdapter`]: bounded, normalized calls to [`DeviceControl`]
//! - [`MenuModel`] / [`ContextStack`]: per-screen selection and back history
//! - [`Runtime`]: single-consumer loop over an [`EventSubscription`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adapter;
mod config;
mod context;
mod controller;
mod device;
mod error;
mod event;
mod info;
mod memory;
mod menu;
mod navigation;
mod router;
mod runtime;

pub use adapter::{DeviceActionAdapter, Notice, NoticeDuration, Outcome, SkipReason};
pub use config::PanelConfig;
pub use context::ContextStack;
pub use controller::MenuController;
pub use device::{
    CommandKind, CommandResult, DeviceControl, DeviceFamily, DeviceInfo, DeviceType, ScsiId,
    ShutdownScope,
};
pub use error::{DeviceError, NavigationError};
pub use event::{
    BUTTON_1, BUTTON_2, ButtonId, EventPublisher, EventSubscription, HardwareEvent, ROTARY_BUTTON,
    Rotation, event_channel,
};
pub use info::{Action, Context, HandlerKey, ImageSelection, InfoObject};
pub use memory::{MemoryDeviceManager, RecordedCommand};
pub use menu::{MenuEntry, MenuModel};
pub use navigation::{Carry, Direction, MenuId, NavigationState, Segue, StackOp, Transition};
pub use router::EventRouter;
pub use runtime::Runtime;
