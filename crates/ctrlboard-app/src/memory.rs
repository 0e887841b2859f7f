//! In-memory device manager.
//!
//! [`MemoryDeviceManager`] stands in for the remote emulation daemon in tests
//! and in the terminal simulator. State lives behind `Arc<Mutex<_>>` so clones
//! share it: the router owns one handle while tests or the menu builder read
//! snapshots through another.

use std::{
    collections::{BTreeMap, HashSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{
    CommandKind, CommandResult, DeviceControl, DeviceError, DeviceFamily, DeviceInfo, DeviceType,
    ScsiId, ShutdownScope,
};

/// Highest valid SCSI id.
const MAX_SCSI_ID: ScsiId = 7;

/// A command received by [`MemoryDeviceManager`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCommand {
    /// `attach_image`
    Attach {
        /// Target slot.
        scsi_id: ScsiId,
        /// Requested device class.
        device_type: DeviceType,
        /// Image file name.
        image: String,
    },
    /// `detach_by_id`
    Detach {
        /// Target slot.
        scsi_id: ScsiId,
    },
    /// `eject_by_id`
    Eject {
        /// Target slot.
        scsi_id: ScsiId,
    },
    /// `list_devices`
    List {
        /// Queried slot.
        scsi_id: ScsiId,
    },
    /// `read_config`
    ReadConfig {
        /// Profile name.
        profile: String,
    },
    /// `shutdown`
    Shutdown {
        /// Requested scope.
        scope: ShutdownScope,
    },
}

impl RecordedCommand {
    /// Kind of this command.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Attach { .. } => CommandKind::Attach,
            Self::Detach { .. } => CommandKind::Detach,
            Self::Eject { .. } => CommandKind::Eject,
            Self::List { .. } => CommandKind::List,
            Self::ReadConfig { .. } => CommandKind::ReadConfig,
            Self::Shutdown { .. } => CommandKind::Shutdown,
        }
    }
}

/// Device manager that keeps all state in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDeviceManager {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Bound devices keyed by SCSI id
    slots: BTreeMap<ScsiId, DeviceInfo>,

    /// Image files available for attaching
    images: Vec<String>,

    /// Named slot layouts
    profiles: BTreeMap<String, Vec<DeviceInfo>>,

    /// Last shutdown request
    shutdown: Option<ShutdownScope>,

    commands: Vec<RecordedCommand>,

    /// One-shot failures, consumed by the next command of that kind
    failures: HashSet<CommandKind>,
}

impl MemoryDeviceManager {
    /// Empty manager: no devices, images or profiles.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bind `device` to its slot, replacing whatever was there.
    pub fn bind(&self, device: DeviceInfo) {
        self.lock().slots.insert(device.scsi_id, device);
    }

    /// Add an image to the catalogue.
    pub fn add_image(&self, name: impl Into<String>) {
        let name = name.into();
        let mut inner = self.lock();
        if !inner.images.contains(&name) {
            inner.images.push(name);
        }
    }

    /// Register a profile with the slot layout it restores.
    pub fn add_profile(&self, name: impl Into<String>, devices: Vec<DeviceInfo>) {
        self.lock().profiles.insert(name.into(), devices);
    }

    /// Make the next command of `kind` fail.
    ///
    /// Listing failures surface as [`DeviceError::Transport`]; every other
    /// kind returns a failed [`CommandResult`].
    pub fn fail_next(&self, kind: CommandKind) {
        self.lock().failures.insert(kind);
    }

    /// Device bound to `scsi_id`.
    pub fn slot(&self, scsi_id: ScsiId) -> Option<DeviceInfo> {
        self.lock().slots.get(&scsi_id).cloned()
    }

    /// All bound devices in SCSI id order.
    pub fn slots(&self) -> Vec<DeviceInfo> {
        self.lock().slots.values().cloned().collect()
    }

    /// Image catalogue in insertion order.
    pub fn images(&self) -> Vec<String> {
        self.lock().images.clone()
    }

    /// Profile names in sorted order.
    pub fn profiles(&self) -> Vec<String> {
        self.lock().profiles.keys().cloned().collect()
    }

    /// Every command received so far.
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.lock().commands.clone()
    }

    /// Scope of the last shutdown request.
    pub fn last_shutdown(&self) -> Option<ShutdownScope> {
        self.lock().shutdown
    }

    /// Record `command` and consume a pending failure for its kind.
    ///
    /// Returns the locked state when the command should proceed.
    fn begin(&self, command: RecordedCommand) -> Result<MutexGuard<'_, Inner>, CommandResult> {
        let kind = command.kind();
        let mut inner = self.lock();
        inner.commands.push(command);
        if inner.failures.remove(&kind) {
            return Err(CommandResult::failure(format!("injected {kind:?} failure")));
        }
        Ok(inner)
    }

    fn attach_sync(&self, scsi_id: ScsiId, device_type: &DeviceType, image: &str) -> CommandResult {
        let command = RecordedCommand::Attach {
            scsi_id,
            device_type: device_type.clone(),
            image: image.to_owned(),
        };
        let mut inner = match self.begin(command) {
            Ok(inner) => inner,
            Err(failure) => return failure,
        };

        if scsi_id > MAX_SCSI_ID {
            return CommandResult::failure(format!("invalid SCSI id {scsi_id}"));
        }

        if let Some(device) = inner.slots.get_mut(&scsi_id) {
            if device.device_type.family() == DeviceFamily::Removable && !device.has_medium() {
                image.clone_into(&mut device.image);
                return CommandResult::success();
            }
            return CommandResult::failure(format!("SCSI id {scsi_id} is already in use"));
        }

        let device = DeviceInfo { scsi_id, device_type: device_type.clone(), image: image.to_owned() };
        inner.slots.insert(scsi_id, device);
        CommandResult::success()
    }

    fn detach_sync(&self, scsi_id: ScsiId) -> CommandResult {
        let mut inner = match self.begin(RecordedCommand::Detach { scsi_id }) {
            Ok(inner) => inner,
            Err(failure) => return failure,
        };

        match inner.slots.remove(&scsi_id) {
            Some(_) => CommandResult::success(),
            None => CommandResult::failure(format!("no device attached to SCSI id {scsi_id}")),
        }
    }

    fn eject_sync(&self, scsi_id: ScsiId) -> CommandResult {
        let mut inner = match self.begin(RecordedCommand::Eject { scsi_id }) {
            Ok(inner) => inner,
            Err(failure) => return failure,
        };

        match inner.slots.get_mut(&scsi_id) {
            Some(device)
                if device.device_type.family() == DeviceFamily::Removable
                    && device.has_medium() =>
            {
                device.image.clear();
                CommandResult::success()
            },
            Some(_) => CommandResult::failure(format!("no medium to eject at SCSI id {scsi_id}")),
            None => CommandResult::failure(format!("no device attached to SCSI id {scsi_id}")),
        }
    }

    fn list_sync(&self, scsi_id: ScsiId) -> Result<Vec<DeviceInfo>, DeviceError> {
        let inner = self
            .begin(RecordedCommand::List { scsi_id })
            .map_err(|failure| DeviceError::Transport(failure.payload.unwrap_or_default()))?;

        Ok(inner.slots.get(&scsi_id).cloned().into_iter().collect())
    }

    fn read_config_sync(&self, profile: &str) -> CommandResult {
        let mut inner = match self.begin(RecordedCommand::ReadConfig { profile: profile.into() }) {
            Ok(inner) => inner,
            Err(failure) => return failure,
        };

        let Some(devices) = inner.profiles.get(profile).cloned() else {
            return CommandResult::failure(format!("profile {profile} not found"));
        };
        inner.slots = devices.into_iter().map(|d| (d.scsi_id, d)).collect();
        CommandResult::success()
    }

    fn shutdown_sync(&self, scope: ShutdownScope) -> CommandResult {
        let mut inner = match self.begin(RecordedCommand::Shutdown { scope }) {
            Ok(inner) => inner,
            Err(failure) => return failure,
        };

        inner.shutdown = Some(scope);
        CommandResult::success()
    }
}

impl DeviceControl for MemoryDeviceManager {
    async fn attach_image(
        &mut self,
        scsi_id: ScsiId,
        device_type: &DeviceType,
        image: &str,
    ) -> Result<CommandResult, DeviceError> {
        Ok(self.attach_sync(scsi_id, device_type, image))
    }

    async fn detach_by_id(&mut self, scsi_id: ScsiId) -> Result<CommandResult, DeviceError> {
        Ok(self.detach_sync(scsi_id))
    }

    async fn eject_by_id(&mut self, scsi_id: ScsiId) -> Result<CommandResult, DeviceError> {
        Ok(self.eject_sync(scsi_id))
    }

    async fn list_devices(&mut self, scsi_id: ScsiId) -> Result<Vec<DeviceInfo>, DeviceError> {
        self.list_sync(scsi_id)
    }

    async fn read_config(&mut self, profile: &str) -> Result<CommandResult, DeviceError> {
        Ok(self.read_config_sync(profile))
    }

    async fn shutdown(&mut self, scope: ShutdownScope) -> Result<CommandResult, DeviceError> {
        Ok(self.shutdown_sync(scope))
    }
}
