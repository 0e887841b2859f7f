//! Renderer collaborator interface.
//!
//! The [`MenuController`] trait is everything the core needs from the menu
//! renderer: access to the active menu, transient messages, segues and
//! redraw requests. Building menu content and painting it stay on the
//! implementation side.

use std::time::Duration;

use crate::{Direction, InfoObject, MenuId, MenuModel};

/// Menu renderer as seen by the router.
pub trait MenuController {
    /// The menu currently on screen.
    fn active_menu(&self) -> &MenuModel;

    /// Mutable access to the active menu, for cursor movement.
    fn active_menu_mut(&mut self) -> &mut MenuModel;

    /// Redraw after the current event has been handled.
    fn request_render(&mut self);

    /// Overlay a transient message.
    fn show_message(&mut self, text: &str, duration: Duration);

    /// Replace the active menu with `menu`, entered with `context`.
    fn transition_to(&mut self, menu: MenuId, context: Option<InfoObject>, direction: Direction);

    /// Periodic housekeeping between events, such as expiring messages.
    fn tick(&mut self) {}
}
