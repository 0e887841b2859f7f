//! Device command adapter.
//!
//! The [`DeviceActionAdapter`] wraps a [`DeviceControl`] implementation and
//! turns every call into an [`Outcome`]: the normalized [`CommandResult`] plus
//! the operator-facing [`Notice`] for it.
//!
//! # Responsibilities
//!
//! - Bounds every remote call with the configured timeout.
//! - Converts transport errors and timeouts into failed results.
//! - Applies the detach/eject policy for the device bound to a slot.
//! - Never fails towards the caller.

use std::{future::Future, time::Duration};

use crate::{
    CommandKind, CommandResult, DeviceControl, DeviceError, DeviceFamily, DeviceType,
    ImageSelection, ScsiId, ShutdownScope,
};

/// How long a notice stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDuration {
    /// The configured default.
    Normal,
    /// The configured extended duration.
    Extended,
}

/// Operator-facing transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text.
    pub text: String,
    /// Display duration class.
    pub duration: NoticeDuration,
}

impl Notice {
    fn normal(text: impl Into<String>) -> Self {
        Self { text: text.into(), duration: NoticeDuration::Normal }
    }

    fn slot(scsi_id: ScsiId, verb: &str) -> Self {
        Self::normal(format!("ID {scsi_id} {verb}!"))
    }
}

/// Why no command was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing is bound to the slot.
    NoDevice,
    /// The bound device is neither fixed nor removable.
    UnsupportedDeviceType(DeviceType),
    /// The menu carried no SCSI id.
    MissingScsiId,
    /// The device listing failed or timed out.
    QueryFailed(String),
}

/// Normalized result of an adapter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A command was issued.
    Completed {
        /// Normalized command result.
        result: CommandResult,
        /// Message to show.
        notice: Notice,
    },

    /// No command was issued.
    Skipped(SkipReason),
}

impl Outcome {
    /// Message to show, if any.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Completed { notice, .. } => Some(notice),
            Self::Skipped(_) => None,
        }
    }

    /// Command result, if a command was issued.
    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            Self::Completed { result, .. } => Some(result),
            Self::Skipped(_) => None,
        }
    }
}

/// Bounded, normalized access to the device manager.
#[derive(Debug)]
pub struct DeviceActionAdapter<D> {
    device: D,
    timeout: Duration,
    shutdown_scope: ShutdownScope,
}

impl<D: DeviceControl> DeviceActionAdapter<D> {
    /// Wrap `device`, bounding each call by `timeout`.
    pub fn new(device: D, timeout: Duration, shutdown_scope: ShutdownScope) -> Self {
        Self { device, timeout, shutdown_scope }
    }

    /// The wrapped device manager.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Load a configuration profile.
    pub async fn load_profile(&mut self, name: &str) -> Outcome {
        tracing::info!(profile = name, "Loading profile");
        let result =
            bounded(self.timeout, CommandKind::ReadConfig, self.device.read_config(name)).await;

        let notice =
            Notice::normal(if result.status { "Profile loaded!" } else { "Loading failed!" });
        Outcome::Completed { result, notice }
    }

    /// Request a shutdown. The result is only logged.
    pub async fn shutdown(&mut self) -> Outcome {
        let scope = self.shutdown_scope;
        tracing::info!(scope = scope.as_str(), "Requesting shutdown");
        let result = bounded(self.timeout, CommandKind::Shutdown, self.device.shutdown(scope)).await;
        tracing::debug!(?result, "Shutdown result");

        let notice = Notice { text: "Shutting down!".into(), duration: NoticeDuration::Extended };
        Outcome::Completed { result, notice }
    }

    /// Attach the selected image to `scsi_id`.
    pub async fn attach_image(&mut self, scsi_id: ScsiId, image: &ImageSelection) -> Outcome {
        tracing::info!(scsi_id, image = %image.name, device_type = %image.device_type, "Attaching image");
        let call = self.device.attach_image(scsi_id, &image.device_type, &image.name);
        let result = bounded(self.timeout, CommandKind::Attach, call).await;

        let notice = if result.status {
            Notice::slot(scsi_id, "attached")
        } else {
            Notice::normal("Attach failed!")
        };
        Outcome::Completed { result, notice }
    }

    /// Detach or eject whatever is bound to `scsi_id`.
    ///
    /// Fixed devices are detached. Removable devices are ejected while a
    /// medium is loaded and detached otherwise. Other device classes are left
    /// alone.
    pub async fn detach_eject(&mut self, scsi_id: ScsiId) -> Outcome {
        let listing = tokio::time::timeout(self.timeout, self.device.list_devices(scsi_id)).await;
        let devices = match listing {
            Ok(Ok(devices)) => devices,
            Ok(Err(e)) => return query_failed(scsi_id, &e),
            Err(_) => return query_failed(scsi_id, &DeviceError::Timeout(self.timeout)),
        };

        let Some(device) = devices.into_iter().next() else {
            tracing::debug!(scsi_id, "Nothing attached, skipping detach/eject");
            return Outcome::Skipped(SkipReason::NoDevice);
        };

        match device.device_type.family() {
            DeviceFamily::Fixed => self.detach(scsi_id).await,
            DeviceFamily::Removable if device.has_medium() => self.eject(scsi_id).await,
            DeviceFamily::Removable => self.detach(scsi_id).await,
            DeviceFamily::Other => {
                tracing::info!(
                    scsi_id,
                    device_type = %device.device_type,
                    "Device type currently unsupported for detach/eject"
                );
                Outcome::Skipped(SkipReason::UnsupportedDeviceType(device.device_type))
            },
        }
    }

    async fn detach(&mut self, scsi_id: ScsiId) -> Outcome {
        tracing::info!(scsi_id, "Detaching device");
        let result =
            bounded(self.timeout, CommandKind::Detach, self.device.detach_by_id(scsi_id)).await;

        let notice = if result.status {
            Notice::slot(scsi_id, "detached")
        } else {
            Notice::normal("Detach failed!")
        };
        Outcome::Completed { result, notice }
    }

    async fn eject(&mut self, scsi_id: ScsiId) -> Outcome {
        tracing::info!(scsi_id, "Ejecting medium");
        let result =
            bounded(self.timeout, CommandKind::Eject, self.device.eject_by_id(scsi_id)).await;

        let notice = if result.status {
            Notice::slot(scsi_id, "ejected")
        } else {
            Notice::normal("Eject failed!")
        };
        Outcome::Completed { result, notice }
    }
}

/// Await `call` for at most `timeout`, folding errors into a failed result.
async fn bounded<F>(timeout: Duration, kind: CommandKind, call: F) -> CommandResult
where
    F: Future<Output = Result<CommandResult, DeviceError>>,
{
    let error = match tokio::time::timeout(timeout, call).await {
        Ok(Ok(result)) => {
            if !result.status {
                tracing::warn!(?kind, payload = ?result.payload, "Remote command failed");
            }
            return result;
        },
        Ok(Err(e)) => e,
        Err(_) => DeviceError::Timeout(timeout),
    };

    tracing::warn!(?kind, %error, "Remote command did not complete");
    CommandResult::failure(error.to_string())
}

fn query_failed(scsi_id: ScsiId, error: &DeviceError) -> Outcome {
    tracing::warn!(scsi_id, %error, "Device listing failed, skipping detach/eject");
    Outcome::Skipped(SkipReason::QueryFailed(error.to_string()))
}
