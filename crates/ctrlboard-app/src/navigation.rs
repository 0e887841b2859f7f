//! Navigation state machine.
//!
//! The transition table maps a [`HandlerKey`] to a [`Transition`]. Each
//! transition is pure data: target menu, stack operation, which context
//! object travels with the segue, and a direction hint for the renderer.
//! [`NavigationState`] owns the [`ContextStack`] and the renderer and applies
//! a [`Segue`] to both.
//!
//! # Table
//!
//! | key | stack | target |
//! |---|---|---|
//! | `scsi_id_openactionmenu` | push selected | `Action` |
//! | `action_menu_return` | pop | `ScsiId` |
//! | `action_menu_slot_attachinsert` | push active | `Images` |
//! | `action_menu_slot_detacheject` | clear | `ScsiId` |
//! | `action_menu_slot_info` | push active | `DeviceInfo` |
//! | `device_info_return` | pop | `Action` |
//! | `action_menu_loadprofile` | push active | `Profiles` |
//! | `profiles_loadprofile` | clear | `ScsiId` |
//! | `action_menu_shutdown` | keep | `ScsiId` |
//! | `images_return` | pop | `Action` |
//! | `images_image_attachinsert` | clear | `ScsiId` |

use crate::{Action, Context, ContextStack, HandlerKey, InfoObject, MenuController, NavigationError};

/// Menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuId {
    /// Root list of SCSI ids.
    ScsiId,
    /// Per-id action list.
    Action,
    /// Image browser.
    Images,
    /// Device properties.
    DeviceInfo,
    /// Profile list.
    Profiles,
}

impl MenuId {
    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::ScsiId => "SCSI IDs",
            Self::Action => "Actions",
            Self::Images => "Images",
            Self::DeviceInfo => "Device Info",
            Self::Profiles => "Profiles",
        }
    }

    /// Forward transitions needed to reach this menu from the root.
    pub fn depth(self) -> usize {
        match self {
            Self::ScsiId => 0,
            Self::Action => 1,
            Self::Images | Self::DeviceInfo | Self::Profiles => 2,
        }
    }
}

/// Visual direction hint for the segue animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Deeper into the hierarchy (slides left).
    Forward,
    /// Back towards the root (slides right).
    Back,
}

/// Which context object a segue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    /// No context.
    Nothing,
    /// The payload of the selected entry.
    Selected,
    /// The context the active menu was entered with.
    ActiveContext,
    /// The frame removed by the pop.
    Popped,
}

/// Stack effect of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    /// Push the referenced context.
    Push(Carry),
    /// Pop one frame.
    Pop,
    /// Drop all history.
    Clear,
    /// Leave the stack alone.
    Keep,
}

/// A fully described menu change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segue {
    /// Menu to show.
    pub target: MenuId,
    /// Stack effect, applied before the menu changes.
    pub stack: StackOp,
    /// Context handed to the target menu.
    pub carry: Carry,
    /// Animation hint.
    pub direction: Direction,
}

/// Rows of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `scsi_id.openactionmenu`
    OpenActionMenu,
    /// `action_menu.return`
    ActionMenuReturn,
    /// `action_menu.slot_attachinsert`
    SlotAttachInsert,
    /// `action_menu.slot_detacheject`
    SlotDetachEject,
    /// `action_menu.slot_info`
    SlotInfo,
    /// `device_info.return`
    DeviceInfoReturn,
    /// `action_menu.loadprofile`
    OpenProfiles,
    /// `profiles.loadprofile`
    LoadProfile,
    /// `action_menu.shutdown`
    Shutdown,
    /// `images.return`
    ImagesReturn,
    /// `images.image_attachinsert`
    ImageAttachInsert,
}

impl Transition {
    /// Resolve a key. `None` means no handler is registered.
    pub fn lookup(key: HandlerKey) -> Option<Self> {
        let transition = match (key.context, key.action) {
            (Context::ScsiId, Action::OpenActionMenu) => Self::OpenActionMenu,
            (Context::ActionMenu, Action::Return) => Self::ActionMenuReturn,
            (Context::ActionMenu, Action::SlotAttachInsert) => Self::SlotAttachInsert,
            (Context::ActionMenu, Action::SlotDetachEject) => Self::SlotDetachEject,
            (Context::ActionMenu, Action::SlotInfo) => Self::SlotInfo,
            (Context::DeviceInfo, Action::Return) => Self::DeviceInfoReturn,
            (Context::ActionMenu, Action::LoadProfile) => Self::OpenProfiles,
            (Context::Profiles, Action::LoadProfile) => Self::LoadProfile,
            (Context::ActionMenu, Action::Shutdown) => Self::Shutdown,
            (Context::Images, Action::Return) => Self::ImagesReturn,
            (Context::Images, Action::ImageAttachInsert) => Self::ImageAttachInsert,
            _ => return None,
        };
        Some(transition)
    }

    /// Menu shown after the transition.
    pub fn target(self) -> MenuId {
        match self {
            Self::OpenActionMenu | Self::DeviceInfoReturn | Self::ImagesReturn => MenuId::Action,
            Self::SlotAttachInsert => MenuId::Images,
            Self::SlotInfo => MenuId::DeviceInfo,
            Self::OpenProfiles => MenuId::Profiles,
            Self::ActionMenuReturn
            | Self::SlotDetachEject
            | Self::LoadProfile
            | Self::Shutdown
            | Self::ImageAttachInsert => MenuId::ScsiId,
        }
    }

    /// Stack effect.
    pub fn stack_op(self) -> StackOp {
        match self {
            Self::OpenActionMenu => StackOp::Push(Carry::Selected),
            Self::SlotAttachInsert | Self::SlotInfo | Self::OpenProfiles => {
                StackOp::Push(Carry::ActiveContext)
            },
            Self::ActionMenuReturn | Self::DeviceInfoReturn | Self::ImagesReturn => StackOp::Pop,
            Self::SlotDetachEject | Self::LoadProfile | Self::ImageAttachInsert => StackOp::Clear,
            Self::Shutdown => StackOp::Keep,
        }
    }

    /// Context handed to the target menu.
    pub fn carry(self) -> Carry {
        match self {
            Self::OpenActionMenu => Carry::Selected,
            Self::SlotAttachInsert
            | Self::SlotDetachEject
            | Self::SlotInfo
            | Self::DeviceInfoReturn
            | Self::ImageAttachInsert => Carry::ActiveContext,
            Self::ImagesReturn => Carry::Popped,
            Self::ActionMenuReturn | Self::OpenProfiles | Self::LoadProfile | Self::Shutdown => {
                Carry::Nothing
            },
        }
    }

    /// Animation hint: forward for pushes, back for everything else.
    pub fn direction(self) -> Direction {
        match self.stack_op() {
            StackOp::Push(_) => Direction::Forward,
            StackOp::Pop | StackOp::Clear | StackOp::Keep => Direction::Back,
        }
    }

    /// The full segue for this row.
    pub fn segue(self) -> Segue {
        Segue {
            target: self.target(),
            stack: self.stack_op(),
            carry: self.carry(),
            direction: self.direction(),
        }
    }
}

/// Owned navigation state: back history plus the renderer.
///
/// Mutated only through [`NavigationState::apply`] and the router.
#[derive(Debug)]
pub struct NavigationState<M> {
    controller: M,
    stack: ContextStack,
}

impl<M: MenuController> NavigationState<M> {
    /// Start at whatever menu `controller` currently shows, with no history.
    pub fn new(controller: M) -> Self {
        Self { controller, stack: ContextStack::new() }
    }

    /// The renderer.
    pub fn controller(&self) -> &M {
        &self.controller
    }

    /// Mutable access to the renderer.
    pub fn controller_mut(&mut self) -> &mut M {
        &mut self.controller
    }

    /// Back-navigation history.
    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    /// Identifier of the active menu.
    pub fn active_menu(&self) -> MenuId {
        self.controller.active_menu().id()
    }

    /// Apply `segue` on behalf of the `selected` entry.
    ///
    /// The stack operation runs first. If a pop finds no history the segue is
    /// abandoned and neither the stack nor the active menu changes.
    pub fn apply(&mut self, segue: Segue, selected: &InfoObject) -> Result<MenuId, NavigationError> {
        let active = self.controller.active_menu().context().cloned();

        let popped = match segue.stack {
            StackOp::Push(source) => {
                let frame = resolve(source, selected, active.as_ref(), None);
                self.stack.push(frame);
                None
            },
            StackOp::Pop => self.stack.pop()?,
            StackOp::Clear => {
                self.stack.clear();
                None
            },
            StackOp::Keep => None,
        };

        let context = resolve(segue.carry, selected, active.as_ref(), popped);
        self.controller.transition_to(segue.target, context, segue.direction);
        Ok(segue.target)
    }
}

fn resolve(
    carry: Carry,
    selected: &InfoObject,
    active: Option<&InfoObject>,
    popped: Option<InfoObject>,
) -> Option<InfoObject> {
    match carry {
        Carry::Nothing => None,
        Carry::Selected => Some(selected.clone()),
        Carry::ActiveContext => active.cloned(),
        Carry::Popped => popped,
    }
}
