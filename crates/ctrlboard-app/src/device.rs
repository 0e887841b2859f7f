//! Remote device-control collaborator interface.
//!
//! The [`DeviceControl`] trait decouples the router from how commands reach
//! the storage emulation daemon. Implementations own the transport; the
//! [`crate::DeviceActionAdapter`] bounds and normalizes every call.

use std::{fmt, future::Future};

use crate::DeviceError;

/// SCSI target id, `0..=7`.
pub type ScsiId = u8;

/// Device class code reported by the device manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// SASI hard disk.
    Sahd,
    /// SCSI hard disk.
    Schd,
    /// Host bridge.
    Scbr,
    /// DaynaPORT network adapter.
    Scdp,
    /// Removable disk.
    Scrm,
    /// Magneto-optical drive.
    Scmo,
    /// CD-ROM drive.
    Sccd,
    /// Printer.
    Sclp,
    /// Host services.
    Schs,
    /// Any code this build does not know.
    Other(String),
}

/// How a device class is handled by detach/eject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFamily {
    /// Always detached.
    Fixed,
    /// Ejected while a medium is loaded, detached otherwise.
    Removable,
    /// Not handled.
    Other,
}

impl DeviceType {
    /// Parse a device manager code. Unknown codes are kept verbatim.
    pub fn from_code(code: &str) -> Self {
        match code {
            "SAHD" => Self::Sahd,
            "SCHD" => Self::Schd,
            "SCBR" => Self::Scbr,
            "SCDP" => Self::Scdp,
            "SCRM" => Self::Scrm,
            "SCMO" => Self::Scmo,
            "SCCD" => Self::Sccd,
            "SCLP" => Self::Sclp,
            "SCHS" => Self::Schs,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Device manager code.
    pub fn code(&self) -> &str {
        match self {
            Self::Sahd => "SAHD",
            Self::Schd => "SCHD",
            Self::Scbr => "SCBR",
            Self::Scdp => "SCDP",
            Self::Scrm => "SCRM",
            Self::Scmo => "SCMO",
            Self::Sccd => "SCCD",
            Self::Sclp => "SCLP",
            Self::Schs => "SCHS",
            Self::Other(code) => code,
        }
    }

    /// Detach/eject family.
    pub fn family(&self) -> DeviceFamily {
        match self {
            Self::Sahd | Self::Schd | Self::Scbr | Self::Scdp => DeviceFamily::Fixed,
            Self::Scrm | Self::Scmo | Self::Sccd => DeviceFamily::Removable,
            Self::Sclp | Self::Schs | Self::Other(_) => DeviceFamily::Other,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A device bound to a SCSI id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Slot the device occupies.
    pub scsi_id: ScsiId,
    /// Device class.
    pub device_type: DeviceType,
    /// Loaded image file. Empty when no medium is loaded.
    pub image: String,
}

impl DeviceInfo {
    /// `true` if an image is loaded.
    pub fn has_medium(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Outcome of a remote command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub status: bool,
    /// Diagnostic detail from the device manager.
    pub payload: Option<String>,
}

impl CommandResult {
    /// Successful result without detail.
    pub fn success() -> Self {
        Self { status: true, payload: None }
    }

    /// Failed result with a reason.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self { status: false, payload: Some(reason.into()) }
    }
}

/// What a shutdown request stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShutdownScope {
    /// Only the emulation daemon.
    Daemon,
    /// The whole host.
    #[default]
    System,
    /// Reboot the host.
    Reboot,
}

impl ShutdownScope {
    /// Scope name understood by the device manager.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daemon => "daemon",
            Self::System => "system",
            Self::Reboot => "reboot",
        }
    }
}

/// Remote command kinds, used for logging and fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `attach_image`
    Attach,
    /// `detach_by_id`
    Detach,
    /// `eject_by_id`
    Eject,
    /// `list_devices`
    List,
    /// `read_config`
    ReadConfig,
    /// `shutdown`
    Shutdown,
}

/// The remote device manager.
///
/// All methods are async; the adapter bounds each call with a timeout.
/// Calls are serialized through a single owner, so implementations need not
/// be reentrant.
pub trait DeviceControl: Send {
    /// Attach `image` to `scsi_id` as `device_type`, or insert it into an
    /// empty removable drive.
    fn attach_image(
        &mut self,
        scsi_id: ScsiId,
        device_type: &DeviceType,
        image: &str,
    ) -> impl Future<Output = Result<CommandResult, DeviceError>> + Send;

    /// Detach the device bound to `scsi_id`.
    fn detach_by_id(
        &mut self,
        scsi_id: ScsiId,
    ) -> impl Future<Output = Result<CommandResult, DeviceError>> + Send;

    /// Eject the medium from the device bound to `scsi_id`.
    fn eject_by_id(
        &mut self,
        scsi_id: ScsiId,
    ) -> impl Future<Output = Result<CommandResult, DeviceError>> + Send;

    /// Devices bound to `scsi_id`. Empty when the slot is free.
    fn list_devices(
        &mut self,
        scsi_id: ScsiId,
    ) -> impl Future<Output = Result<Vec<DeviceInfo>, DeviceError>> + Send;

    /// Load the named configuration profile.
    fn read_config(
        &mut self,
        profile: &str,
    ) -> impl Future<Output = Result<CommandResult, DeviceError>> + Send;

    /// Request a shutdown of the given scope.
    fn shutdown(
        &mut self,
        scope: ShutdownScope,
    ) -> impl Future<Output = Result<CommandResult, DeviceError>> + Send;
}
