//! Terminal simulation of the control board panel
//!
//! A thin shell over [`ctrlboard_app::Runtime`]: the keyboard stands in for
//! the encoder and buttons, ratatui paints the menus, and a
//! [`ctrlboard_app::MemoryDeviceManager`] plays the device manager.
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod controller;
pub mod error;
pub mod input;
pub mod menus;
pub mod terminal;
pub mod ui;

pub use cli::{Args, ScopeArg};
pub use controller::PanelController;
pub use error::PanelError;
pub use menus::{MenuBuilder, image_device_type};
pub use terminal::TerminalSession;
