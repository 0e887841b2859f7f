//! Observable navigation state.

use ctrlboard_app::{DeviceControl, EventRouter, InfoObject, MenuController, MenuId, ScsiId};

/// Point-in-time copy of the router's observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    /// Active menu.
    pub menu: MenuId,
    /// Number of entries in the active menu.
    pub entries: usize,
    /// Cursor position.
    pub selection: usize,
    /// Frames on the context stack.
    pub stack_depth: usize,
    /// SCSI id the active menu was entered with.
    pub slot: Option<ScsiId>,
}

impl NavigationSnapshot {
    /// Capture `router`'s current state.
    pub fn capture<D: DeviceControl, M: MenuController>(router: &EventRouter<D, M>) -> Self {
        let menu = router.controller().active_menu();
        Self {
            menu: menu.id(),
            entries: menu.entries().len(),
            selection: menu.selection(),
            stack_depth: router.stack().len(),
            slot: menu.context().and_then(InfoObject::slot),
        }
    }
}
