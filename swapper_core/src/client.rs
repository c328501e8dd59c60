use serde::{Deserialize, Serialize};

use crate::menu::MenuEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    LoginScreen,
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

/// The parts of an item definition the shift-click customization reads or
/// rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: i32,
    pub name: String,
    /// Inventory action labels by slot; empty slots are `None`.
    #[serde(default)]
    pub inventory_actions: Vec<Option<String>>,
    /// `-1` means the synthetic "Use" action.
    #[serde(default = "default_shift_click")]
    pub shift_click_action_index: i32,
}

fn default_shift_click() -> i32 {
    -1
}

impl ItemDefinition {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            inventory_actions: Vec::new(),
            shift_click_action_index: -1,
        }
    }

    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.inventory_actions = actions
            .into_iter()
            .map(|action| action.map(Into::into))
            .collect();
        self
    }

    /// Label of the current shift-click action, falling back to "Use" when
    /// the index does not name an inventory action.
    pub fn shift_click_option(&self) -> &str {
        usize::try_from(self.shift_click_action_index)
            .ok()
            .and_then(|index| self.inventory_actions.get(index))
            .and_then(|action| action.as_deref())
            .unwrap_or("Use")
    }

    pub fn action_index(&self, option: &str) -> Option<usize> {
        self.inventory_actions
            .iter()
            .position(|action| action.as_deref() == Some(option))
    }
}

pub trait ItemCatalog {
    fn item_definition(&self, id: i32) -> Option<ItemDefinition>;
}

/// Host-side accessors the plugin needs during a tick.
pub trait Client: ItemCatalog {
    fn game_state(&self) -> GameState;
    fn is_menu_open(&self) -> bool;
    /// Current menu in host order (default entry last).
    fn menu_entries(&self) -> Vec<MenuEntry>;
    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>);
    /// Index of the NPC the hint arrow points at, if any.
    fn hint_arrow_npc(&self) -> Option<i32> {
        None
    }
    fn local_player_region(&self) -> Option<i32> {
        None
    }
    fn reset_item_definition_cache(&mut self) {}
}
