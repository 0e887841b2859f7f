//! Test support for the control board navigation core.
//!
//! # Doubles
//!
//! [`RecordingMenus`] implements the renderer interface over static menu
//! templates and logs every call. [`TestBench`] wires it and a
//! [`ctrlboard_app::MemoryDeviceManager`] into an
//! [`ctrlboard_app::EventRouter`].
//!
//! # Invariant Testing
//!
//! The `invariants` module checks properties that must hold after every
//! event, for any input sequence. Use [`InvariantRegistry::standard()`]
//! together with the event strategies in [`strategies`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bench;
pub mod invariants;
mod recording;
pub mod strategies;

pub use bench::{TestBench, block_on};
pub use invariants::{
    Invariant, InvariantRegistry, InvariantResult, NavigationSnapshot, SelectionInBounds,
    SlotContextPresent, StackCoversDepth, Violation,
};
pub use recording::{RecordingMenus, UiCall, entry_index, standard_menus};
