//! Command line arguments.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use ctrlboard_app::{
    ButtonId, DeviceInfo, DeviceType, MemoryDeviceManager, PanelConfig, ROTARY_BUTTON, ScsiId,
    ShutdownScope,
};

use crate::PanelError;

const MAX_SCSI_ID: ScsiId = 7;

/// Control board panel simulator
#[derive(Parser, Debug)]
#[command(name = "ctrlboard-panel")]
#[command(about = "Terminal simulation of the storage emulator control board")]
#[command(version)]
pub struct Args {
    /// How long ordinary messages stay on screen, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub message_ms: u64,

    /// How long the shutdown message stays on screen, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub shutdown_message_ms: u64,

    /// Upper bound for a single device manager call, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Button that selects the entry under the cursor
    #[arg(long, default_value = ROTARY_BUTTON)]
    pub select_button: String,

    /// Scope of the shutdown command
    #[arg(long, value_enum, default_value_t = ScopeArg::System)]
    pub shutdown_scope: ScopeArg,

    /// Log level (overridden by `RUST_LOG`)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file; the terminal belongs to the panel
    #[arg(long, default_value = "ctrlboard-panel.log")]
    pub log_file: PathBuf,

    /// Image file offered in the image list (repeatable)
    #[arg(long = "image")]
    pub images: Vec<String>,

    /// Device bound at startup, as `ID:TYPE[:IMAGE]` (repeatable)
    #[arg(long = "device", value_parser = parse_device)]
    pub devices: Vec<DeviceInfo>,

    /// Profile restoring the startup devices (repeatable)
    #[arg(long = "profile")]
    pub profiles: Vec<String>,
}

/// `--shutdown-scope` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    /// Stop the device manager only.
    Daemon,
    /// Power off the host.
    System,
    /// Restart the host.
    Reboot,
}

impl From<ScopeArg> for ShutdownScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Daemon => Self::Daemon,
            ScopeArg::System => Self::System,
            ScopeArg::Reboot => Self::Reboot,
        }
    }
}

impl Args {
    /// Router configuration from the arguments.
    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig {
            select_button: ButtonId::new(self.select_button.as_str()),
            message_duration: Duration::from_millis(self.message_ms),
            extended_message_duration: Duration::from_millis(self.shutdown_message_ms),
            command_timeout: Duration::from_millis(self.timeout_ms),
            shutdown_scope: self.shutdown_scope.into(),
            ..PanelConfig::default()
        }
    }

    /// Device manager seeded with the startup devices, images and profiles.
    pub fn seed(&self) -> MemoryDeviceManager {
        let devices = MemoryDeviceManager::new();
        for device in &self.devices {
            devices.bind(device.clone());
        }
        for image in &self.images {
            devices.add_image(image.as_str());
        }
        for profile in &self.profiles {
            devices.add_profile(profile.as_str(), self.devices.clone());
        }
        devices
    }
}

/// Parse `ID:TYPE[:IMAGE]`.
pub fn parse_device(arg: &str) -> Result<DeviceInfo, PanelError> {
    let invalid = |reason| PanelError::InvalidDevice { arg: arg.to_owned(), reason };

    let mut parts = arg.splitn(3, ':');
    let id = parts.next().unwrap_or_default();
    let code = parts.next().ok_or_else(|| invalid("expected ID:TYPE[:IMAGE]"))?;
    let image = parts.next().unwrap_or_default();

    let scsi_id: ScsiId = id.parse().map_err(|_| invalid("SCSI id is not a number"))?;
    if scsi_id > MAX_SCSI_ID {
        return Err(invalid("SCSI id must be 0-7"));
    }
    if code.is_empty() {
        return Err(invalid("missing device type"));
    }

    Ok(DeviceInfo {
        scsi_id,
        device_type: DeviceType::from_code(&code.to_ascii_uppercase()),
        image: image.to_owned(),
    })
}
