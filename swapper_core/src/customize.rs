//! Interactive shift-click configuration on the inventory.
//!
//! While configuration mode is on, opening a menu on an inventory item marks
//! the item's entries as plugin actions, stars the current shift-click
//! option and adds a "Reset" line; clicking one of those entries produces an
//! [`OverrideChange`] for the plugin to persist.

use log::{debug, info};

use crate::client::ItemCatalog;
use crate::menu::{MenuAction, MenuEntries, MenuEntry};
use crate::text::remove_tags;

pub const CONFIGURE: &str = "Configure";
pub const SAVE: &str = "Save";
pub const RESET: &str = "Reset";
pub const MENU_TARGET: &str = "Shift-click";
/// Packed id (group 149, child 0) of the inventory item container.
pub const INVENTORY_WIDGET_ID: i32 = 149 << 16;

const USE: &str = "Use";
const CURRENT_MARKER: &str = "* ";

/// A menu option the player clicked, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuClick {
    pub option: String,
    pub target: String,
    pub action: MenuAction,
    pub widget_id: i32,
    pub item_id: i32,
}

impl MenuClick {
    pub fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            option: entry.option.clone(),
            target: entry.target.clone(),
            action: entry.action,
            widget_id: entry.param1,
            item_id: entry.identifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideChange {
    Set { item_id: i32, index: i32 },
    Unset { item_id: i32 },
}

#[derive(Debug, Clone, Default)]
pub struct ShiftClickCustomizer {
    enabled: bool,
    configuring: bool,
    shift_held: bool,
}

impl ShiftClickCustomizer {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_configuring(&self) -> bool {
        self.configuring
    }

    pub fn shift_held(&self) -> bool {
        self.shift_held
    }

    /// Returns whether the state actually changed. Disabling leaves
    /// configuration mode and releases the modifier.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        if !enabled {
            self.configuring = false;
            self.shift_held = false;
        }
        info!(
            "shift-click customization {}",
            if enabled { "enabled" } else { "disabled" }
        );
        true
    }

    /// The option the inventory tab currently offers, if any.
    pub fn inventory_tab_option(&self) -> Option<&'static str> {
        match (self.enabled, self.configuring) {
            (false, _) => None,
            (true, false) => Some(CONFIGURE),
            (true, true) => Some(SAVE),
        }
    }

    /// Inventory tab option clicked: "Configure" on "Shift-click" enters
    /// configuration mode, anything else leaves it.
    pub fn on_inventory_tab_option(&mut self, option: &str, target: &str) {
        if !self.enabled {
            return;
        }
        let configuring = option == CONFIGURE && remove_tags(target) == MENU_TARGET;
        if configuring != self.configuring {
            info!(
                "{} shift-click configuration",
                if configuring { "entering" } else { "leaving" }
            );
        }
        self.configuring = configuring;
    }

    /// Key listener; the modifier is only tracked while enabled.
    pub fn on_shift_key(&mut self, pressed: bool) {
        if self.enabled {
            self.shift_held = pressed;
        }
    }

    pub fn on_focus_changed(&mut self, focused: bool) {
        if !focused {
            self.shift_held = false;
        }
    }

    /// Decorates a freshly opened menu. Returns `true` when `entries` was
    /// rewritten and must be published back to the host.
    pub fn on_menu_opened(&self, entries: &mut MenuEntries, items: &dyn ItemCatalog) -> bool {
        if !self.configuring {
            return false;
        }
        let Some(first) = entries.default_entry() else {
            return false;
        };
        if first.param1 != INVENTORY_WIDGET_ID || first.identifier == -1 {
            return false;
        }
        let (item_id, widget_id) = (first.identifier, first.param1);
        let Some(item) = items.item_definition(item_id) else {
            return false;
        };

        let current = item.shift_click_option().to_string();
        for entry in entries.iter_mut() {
            if remove_tags(&entry.target) != item.name {
                continue;
            }
            entry.action = MenuAction::Runelite;
            if entry.option == current {
                entry.option = format!("{CURRENT_MARKER}{current}");
            }
        }

        entries.push_top(
            MenuEntry::new(RESET, MENU_TARGET)
                .with_identifier(item_id)
                .with_param1(widget_id)
                .with_action(MenuAction::Runelite),
        );
        debug!("decorated menu for {} ({item_id})", item.name);
        true
    }

    /// Translates a click on one of the decorated entries into an override
    /// change. Clicks outside the inventory, or on options the item does
    /// not have, yield `None`.
    pub fn on_menu_option_clicked(
        &self,
        click: &MenuClick,
        items: &dyn ItemCatalog,
    ) -> Option<OverrideChange> {
        if click.action != MenuAction::Runelite
            || click.widget_id != INVENTORY_WIDGET_ID
            || click.item_id == -1
        {
            return None;
        }

        let item_id = click.item_id;
        if click.option == RESET && click.target == MENU_TARGET {
            return Some(OverrideChange::Unset { item_id });
        }

        let item = items.item_definition(item_id)?;
        if item.name != remove_tags(&click.target) {
            return None;
        }

        let index = if click.option == USE {
            -1
        } else {
            i32::try_from(item.action_index(&click.option)?).ok()?
        };
        Some(OverrideChange::Set { item_id, index })
    }
}
