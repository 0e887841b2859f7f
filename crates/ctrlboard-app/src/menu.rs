//! One menu screen: ordered entries plus a selection cursor.

use crate::{InfoObject, MenuId, Rotation};

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Text shown on the display.
    pub label: String,
    /// Payload routed on select. `None` for informational rows.
    pub info: Option<InfoObject>,
}

impl MenuEntry {
    /// Selectable entry.
    pub fn new(label: impl Into<String>, info: InfoObject) -> Self {
        Self { label: label.into(), info: Some(info) }
    }

    /// Informational row; selecting it does nothing.
    pub fn text(label: impl Into<String>) -> Self {
        Self { label: label.into(), info: None }
    }
}

/// Menu screen state.
///
/// # Invariants
///
/// - `selection < entries.len()` whenever `entries` is non-empty
/// - `selection == 0` when `entries` is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    id: MenuId,
    entries: Vec<MenuEntry>,
    selection: usize,
    context: Option<InfoObject>,
}

impl MenuModel {
    /// Menu with the cursor on the first entry.
    pub fn new(id: MenuId, entries: Vec<MenuEntry>) -> Self {
        Self { id, entries, selection: 0, context: None }
    }

    /// Attach the context object the menu was entered with.
    #[must_use]
    pub fn with_context(mut self, context: Option<InfoObject>) -> Self {
        self.context = context;
        self
    }

    /// Menu identifier.
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Cursor position.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Context object the menu was entered with.
    pub fn context(&self) -> Option<&InfoObject> {
        self.context.as_ref()
    }

    /// Entry under the cursor. `None` for an empty menu.
    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.entries.get(self.selection)
    }

    /// Payload of the entry under the cursor.
    pub fn selected_info(&self) -> Option<&InfoObject> {
        self.selected_entry().and_then(|entry| entry.info.as_ref())
    }

    /// Move the cursor one step, clamping at both ends. No wraparound.
    ///
    /// Returns `true` if the selection changed.
    pub fn rotate(&mut self, direction: Rotation) -> bool {
        let before = self.selection;
        match direction {
            Rotation::Clockwise => {
                if self.selection + 1 < self.entries.len() {
                    self.selection += 1;
                }
            },
            Rotation::CounterClockwise => {
                self.selection = self.selection.saturating_sub(1);
            },
        }
        before != self.selection
    }

    /// Place the cursor, clamped to the last entry.
    pub fn select(&mut self, index: usize) {
        self.selection = index.min(self.entries.len().saturating_sub(1));
    }
}
