//! Payloads attached to menu entries.
//!
//! An [`InfoObject`] names the `(context, action)` pair a selectable entry
//! triggers, plus the data that action needs. The pair is the key of the
//! transition table.

use std::fmt;

use crate::device::{DeviceType, ScsiId};

/// Menu family an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Root list of SCSI ids.
    ScsiId,
    /// Per-id action list.
    ActionMenu,
    /// Device property listing.
    DeviceInfo,
    /// Profile list.
    Profiles,
    /// Image list.
    Images,
}

impl Context {
    /// Wire name of the context.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScsiId => "scsi_id",
            Self::ActionMenu => "action_menu",
            Self::DeviceInfo => "device_info",
            Self::Profiles => "profiles",
            Self::Images => "images",
        }
    }
}

/// What selecting an entry asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Open the action menu for a SCSI id.
    OpenActionMenu,
    /// Go back one level.
    Return,
    /// Browse images to attach or insert.
    SlotAttachInsert,
    /// Detach or eject whatever is bound to the slot.
    SlotDetachEject,
    /// Show device properties.
    SlotInfo,
    /// Open the profile list, or load a profile from it.
    LoadProfile,
    /// Shut the host down.
    Shutdown,
    /// Attach or insert the selected image.
    ImageAttachInsert,
}

impl Action {
    /// Wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenActionMenu => "openactionmenu",
            Self::Return => "return",
            Self::SlotAttachInsert => "slot_attachinsert",
            Self::SlotDetachEject => "slot_detacheject",
            Self::SlotInfo => "slot_info",
            Self::LoadProfile => "loadprofile",
            Self::Shutdown => "shutdown",
            Self::ImageAttachInsert => "image_attachinsert",
        }
    }
}

/// Dispatch key: a `(context, action)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    /// Menu family.
    pub context: Context,
    /// Requested action.
    pub action: Action,
}

impl HandlerKey {
    /// Create a key.
    pub fn new(context: Context, action: Action) -> Self {
        Self { context, action }
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.context.as_str(), self.action.as_str())
    }
}

/// Image picked from the image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    /// Image file name as known to the device manager.
    pub name: String,
    /// Device type to attach the image as.
    pub device_type: DeviceType,
}

/// Payload of a selectable menu entry.
///
/// One variant per [`Context`], each carrying only the fields its handlers
/// read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoObject {
    /// Entry of the SCSI id list.
    ScsiId {
        /// Requested action.
        action: Action,
        /// Slot this entry stands for.
        scsi_id: ScsiId,
    },

    /// Entry of the action menu. The slot comes from the menu's context.
    ActionMenu {
        /// Requested action.
        action: Action,
    },

    /// Entry of the device info listing.
    DeviceInfo {
        /// Requested action.
        action: Action,
    },

    /// Entry of the profile list.
    Profiles {
        /// Requested action.
        action: Action,
        /// Profile name.
        name: String,
    },

    /// Entry of the image list. `image` is `None` for non-image rows.
    Images {
        /// Requested action.
        action: Action,
        /// Picked image.
        image: Option<ImageSelection>,
    },
}

impl InfoObject {
    /// Entry that opens the action menu for `scsi_id`.
    pub fn scsi_id(scsi_id: ScsiId) -> Self {
        Self::ScsiId { action: Action::OpenActionMenu, scsi_id }
    }

    /// Action menu entry.
    pub fn action_menu(action: Action) -> Self {
        Self::ActionMenu { action }
    }

    /// Entry that loads the named profile.
    pub fn profile(name: impl Into<String>) -> Self {
        Self::Profiles { action: Action::LoadProfile, name: name.into() }
    }

    /// Entry that attaches the named image as `device_type`.
    pub fn image(name: impl Into<String>, device_type: DeviceType) -> Self {
        Self::Images {
            action: Action::ImageAttachInsert,
            image: Some(ImageSelection { name: name.into(), device_type }),
        }
    }

    /// Menu family of this entry.
    pub fn context(&self) -> Context {
        match self {
            Self::ScsiId { .. } => Context::ScsiId,
            Self::ActionMenu { .. } => Context::ActionMenu,
            Self::DeviceInfo { .. } => Context::DeviceInfo,
            Self::Profiles { .. } => Context::Profiles,
            Self::Images { .. } => Context::Images,
        }
    }

    /// Requested action.
    pub fn action(&self) -> Action {
        match self {
            Self::ScsiId { action, .. }
            | Self::ActionMenu { action }
            | Self::DeviceInfo { action }
            | Self::Profiles { action, .. }
            | Self::Images { action, .. } => *action,
        }
    }

    /// Dispatch key of this entry.
    pub fn key(&self) -> HandlerKey {
        HandlerKey::new(self.context(), self.action())
    }

    /// SCSI id carried by this object, if it is a slot context.
    pub fn slot(&self) -> Option<ScsiId> {
        match self {
            Self::ScsiId { scsi_id, .. } => Some(*scsi_id),
            _ => None,
        }
    }
}
