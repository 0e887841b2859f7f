//! Menu content.
//!
//! Builds the entries of each menu from the device manager's current state.
//! Menus are rebuilt on every transition, so the SCSI id list always shows
//! what an attach or detach just changed.

use ctrlboard_app::{
    Action, DeviceInfo, DeviceType, InfoObject, MemoryDeviceManager, MenuEntry, MenuId, MenuModel,
    ScsiId,
};

/// Number of SCSI ids on the bus.
const SLOT_COUNT: ScsiId = 8;

/// Device type an image is attached as, inferred from its extension.
///
/// `None` for files the panel does not offer.
pub fn image_device_type(name: &str) -> Option<DeviceType> {
    let (_, extension) = name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "hds" | "hda" | "hdn" | "hdi" | "nhd" => Some(DeviceType::Schd),
        "hdr" => Some(DeviceType::Scrm),
        "mos" => Some(DeviceType::Scmo),
        "iso" | "cdr" | "toast" => Some(DeviceType::Sccd),
        _ => None,
    }
}

/// Builds [`MenuModel`]s from a device manager snapshot.
#[derive(Debug, Clone)]
pub struct MenuBuilder {
    devices: MemoryDeviceManager,
}

impl MenuBuilder {
    /// Builder reading from `devices`.
    pub fn new(devices: MemoryDeviceManager) -> Self {
        Self { devices }
    }

    /// Build `menu`, entered with `context`.
    pub fn build(&self, menu: MenuId, context: Option<&InfoObject>) -> MenuModel {
        let slot = context.and_then(InfoObject::slot);
        let entries = match menu {
            MenuId::ScsiId => self.scsi_ids(),
            MenuId::Action => self.actions(slot),
            MenuId::Images => self.images(),
            MenuId::DeviceInfo => self.device_info(slot),
            MenuId::Profiles => self.profiles(),
        };
        MenuModel::new(menu, entries).with_context(context.cloned())
    }

    fn scsi_ids(&self) -> Vec<MenuEntry> {
        (0..SLOT_COUNT)
            .map(|id| {
                let label = match self.devices.slot(id) {
                    Some(device) => slot_label(&device),
                    None => format!("{id} -"),
                };
                MenuEntry::new(label, InfoObject::scsi_id(id))
            })
            .collect()
    }

    fn actions(&self, slot: Option<ScsiId>) -> Vec<MenuEntry> {
        let device = slot.and_then(|id| self.devices.slot(id));
        let loaded = device.as_ref().is_some_and(DeviceInfo::has_medium);

        let attach = if device.is_some() { "Insert" } else { "Attach" };
        let detach = if loaded && device.as_ref().is_some_and(is_removable) {
            "Eject"
        } else {
            "Detach"
        };

        let mut entries = vec![
            MenuEntry::new("Return", InfoObject::action_menu(Action::Return)),
            MenuEntry::new(attach, InfoObject::action_menu(Action::SlotAttachInsert)),
            MenuEntry::new(detach, InfoObject::action_menu(Action::SlotDetachEject)),
            MenuEntry::new("Info", InfoObject::action_menu(Action::SlotInfo)),
        ];
        // The profile list has no return entry, so it is only offered when
        // there is something to load.
        if !self.devices.profiles().is_empty() {
            let load = InfoObject::action_menu(Action::LoadProfile);
            entries.push(MenuEntry::new("Load Profile", load));
        }
        entries.push(MenuEntry::new("Shutdown", InfoObject::action_menu(Action::Shutdown)));
        entries
    }

    fn images(&self) -> Vec<MenuEntry> {
        let back = MenuEntry::new("Return", InfoObject::Images { action: Action::Return, image: None });
        let images = self.devices.images().into_iter().filter_map(|name| {
            let device_type = image_device_type(&name)?;
            Some(MenuEntry::new(name.clone(), InfoObject::image(name, device_type)))
        });
        std::iter::once(back).chain(images).collect()
    }

    fn device_info(&self, slot: Option<ScsiId>) -> Vec<MenuEntry> {
        let mut rows = match slot.and_then(|id| self.devices.slot(id)) {
            Some(device) => vec![
                MenuEntry::text(format!("ID: {}", device.scsi_id)),
                MenuEntry::text(format!("Type: {}", device.device_type)),
                MenuEntry::text(format!(
                    "Image: {}",
                    if device.has_medium() { device.image.as_str() } else { "(none)" }
                )),
            ],
            None => vec![MenuEntry::text("No device attached")],
        };
        rows.push(MenuEntry::new("Return", InfoObject::DeviceInfo { action: Action::Return }));
        rows
    }

    fn profiles(&self) -> Vec<MenuEntry> {
        self.devices
            .profiles()
            .into_iter()
            .map(|name| MenuEntry::new(name.clone(), InfoObject::profile(name)))
            .collect()
    }
}

fn slot_label(device: &DeviceInfo) -> String {
    if device.has_medium() {
        format!("{} {} {}", device.scsi_id, device.device_type, device.image)
    } else {
        format!("{} {}", device.scsi_id, device.device_type)
    }
}

fn is_removable(device: &DeviceInfo) -> bool {
    device.device_type.family() == ctrlboard_app::DeviceFamily::Removable
}
