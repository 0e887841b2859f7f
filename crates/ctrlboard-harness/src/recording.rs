//! Recording menu renderer.
//!
//! [`RecordingMenus`] implements [`MenuController`] over a fixed set of menu
//! templates and logs every call the router makes, so tests can assert on
//! renders, messages and segues without a display.

use std::{collections::BTreeMap, time::Duration};

use ctrlboard_app::{
    Action, DeviceType, Direction, InfoObject, MenuController, MenuEntry, MenuId, MenuModel,
};

/// One call made by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCall {
    /// `request_render`
    Render,
    /// `show_message`
    Message {
        /// Message text.
        text: String,
        /// Requested display time.
        duration: Duration,
    },
    /// `transition_to`
    Transition {
        /// Target menu.
        menu: MenuId,
        /// Carried context.
        context: Option<InfoObject>,
        /// Animation hint.
        direction: Direction,
    },
}

/// Renderer double with static menu templates.
#[derive(Debug, Clone)]
pub struct RecordingMenus {
    templates: BTreeMap<MenuId, Vec<MenuEntry>>,
    active: MenuModel,
    calls: Vec<UiCall>,
}

impl RecordingMenus {
    /// Renderer showing `root`, with no templates for other menus.
    ///
    /// Transitions to a menu without a template show an empty menu.
    pub fn new(root: MenuModel) -> Self {
        let mut templates = BTreeMap::new();
        templates.insert(root.id(), root.entries().to_vec());
        Self { templates, active: root, calls: Vec::new() }
    }

    /// Renderer at the SCSI id list with the [`standard_menus`] templates.
    pub fn standard() -> Self {
        let templates = standard_menus();
        let root = templates.get(&MenuId::ScsiId).cloned().unwrap_or_default();
        Self { templates, active: MenuModel::new(MenuId::ScsiId, root), calls: Vec::new() }
    }

    /// Set the template used whenever `menu` is entered.
    #[must_use]
    pub fn with_menu(mut self, menu: MenuId, entries: Vec<MenuEntry>) -> Self {
        if self.active.id() == menu {
            let context = self.active.context().cloned();
            self.active = MenuModel::new(menu, entries.clone()).with_context(context);
        }
        self.templates.insert(menu, entries);
        self
    }

    /// Every call in order.
    pub fn calls(&self) -> &[UiCall] {
        &self.calls
    }

    /// Number of render requests.
    pub fn renders(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, UiCall::Render)).count()
    }

    /// Message texts in order.
    pub fn messages(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                UiCall::Message { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Most recent message and its duration.
    pub fn last_message(&self) -> Option<(&str, Duration)> {
        self.calls.iter().rev().find_map(|call| match call {
            UiCall::Message { text, duration } => Some((text.as_str(), *duration)),
            _ => None,
        })
    }

    /// Segues in order.
    pub fn transitions(&self) -> Vec<(MenuId, Option<&InfoObject>, Direction)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                UiCall::Transition { menu, context, direction } => {
                    Some((*menu, context.as_ref(), *direction))
                },
                _ => None,
            })
            .collect()
    }
}

impl MenuController for RecordingMenus {
    fn active_menu(&self) -> &MenuModel {
        &self.active
    }

    fn active_menu_mut(&mut self) -> &mut MenuModel {
        &mut self.active
    }

    fn request_render(&mut self) {
        self.calls.push(UiCall::Render);
    }

    fn show_message(&mut self, text: &str, duration: Duration) {
        self.calls.push(UiCall::Message { text: text.to_owned(), duration });
    }

    fn transition_to(&mut self, menu: MenuId, context: Option<InfoObject>, direction: Direction) {
        let entries = self.templates.get(&menu).cloned().unwrap_or_default();
        self.active = MenuModel::new(menu, entries).with_context(context.clone());
        self.calls.push(UiCall::Transition { menu, context, direction });
    }
}

/// Templates for every menu, shaped like the panel's own menus.
///
/// - SCSI id list: ids 0 through 7
/// - Action menu: every slot action plus profiles and shutdown
/// - Images: a disk and a CD image
/// - Profiles: `default` and `mac`
pub fn standard_menus() -> BTreeMap<MenuId, Vec<MenuEntry>> {
    let ids = (0..=7).map(|id| MenuEntry::new(id.to_string(), InfoObject::scsi_id(id))).collect();

    let actions = [
        ("Return", Action::Return),
        ("Attach/Insert", Action::SlotAttachInsert),
        ("Detach/Eject", Action::SlotDetachEject),
        ("Info", Action::SlotInfo),
        ("Load Profile", Action::LoadProfile),
        ("Shutdown", Action::Shutdown),
    ]
    .into_iter()
    .map(|(label, action)| MenuEntry::new(label, InfoObject::action_menu(action)))
    .collect();

    let images = vec![
        MenuEntry::new("Return", InfoObject::Images { action: Action::Return, image: None }),
        MenuEntry::new("system.hds", InfoObject::image("system.hds", DeviceType::Schd)),
        MenuEntry::new("install.iso", InfoObject::image("install.iso", DeviceType::Sccd)),
    ];

    let info = vec![
        MenuEntry::text("Type: SCHD"),
        MenuEntry::new("Return", InfoObject::DeviceInfo { action: Action::Return }),
    ];

    let profiles = ["default", "mac"]
        .into_iter()
        .map(|name| MenuEntry::new(name, InfoObject::profile(name)))
        .collect();

    BTreeMap::from([
        (MenuId::ScsiId, ids),
        (MenuId::Action, actions),
        (MenuId::Images, images),
        (MenuId::DeviceInfo, info),
        (MenuId::Profiles, profiles),
    ])
}

/// Index of the first entry in `menu` whose payload has `action`.
pub fn entry_index(menu: &MenuModel, action: Action) -> Option<usize> {
    menu.entries()
        .iter()
        .position(|entry| entry.info.as_ref().is_some_and(|info| info.action() == action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_builds_menu_from_template() {
        let mut menus = RecordingMenus::standard();

        menus.transition_to(MenuId::Action, Some(InfoObject::scsi_id(3)), Direction::Forward);

        assert_eq!(menus.active_menu().id(), MenuId::Action);
        assert_eq!(menus.active_menu().selection(), 0);
        assert_eq!(menus.active_menu().context(), Some(&InfoObject::scsi_id(3)));
        assert_eq!(entry_index(menus.active_menu(), Action::Shutdown), Some(5));
    }

    #[test]
    fn records_calls_in_order() {
        let mut menus = RecordingMenus::standard();

        menus.show_message("hello", Duration::from_millis(10));
        menus.request_render();

        assert_eq!(menus.messages(), vec!["hello"]);
        assert_eq!(menus.renders(), 1);
        assert_eq!(menus.calls().len(), 2);
    }
}
