//! Standard navigation invariants.

use ctrlboard_app::MenuId;

use super::{Invariant, InvariantResult, NavigationSnapshot, Violation};

/// Selection must point at an entry, or be zero for an empty menu.
pub struct SelectionInBounds;

impl Invariant for SelectionInBounds {
    fn name(&self) -> &'static str {
        "SelectionInBounds"
    }

    fn check(&self, state: &NavigationSnapshot) -> InvariantResult {
        let ok = match state.entries {
            0 => state.selection == 0,
            n => state.selection < n,
        };
        if ok {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!(
                "{:?}: selection {} with {} entries",
                state.menu, state.selection, state.entries
            ),
        })
    }
}

/// The stack holds at least one frame per forward step from the root.
///
/// This is what keeps every return transition from popping an empty stack
/// when navigation starts at the root.
pub struct StackCoversDepth;

impl Invariant for StackCoversDepth {
    fn name(&self) -> &'static str {
        "StackCoversDepth"
    }

    fn check(&self, state: &NavigationSnapshot) -> InvariantResult {
        if state.stack_depth >= state.menu.depth() {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!(
                "{:?} needs depth {} but stack has {} frames",
                state.menu,
                state.menu.depth(),
                state.stack_depth
            ),
        })
    }
}

/// Menus that act on a slot were entered with its SCSI id.
pub struct SlotContextPresent;

impl Invariant for SlotContextPresent {
    fn name(&self) -> &'static str {
        "SlotContextPresent"
    }

    fn check(&self, state: &NavigationSnapshot) -> InvariantResult {
        let needs_slot = matches!(state.menu, MenuId::Action | MenuId::Images | MenuId::DeviceInfo);
        if !needs_slot || state.slot.is_some() {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!("{:?} entered without a SCSI id", state.menu),
        })
    }
}
