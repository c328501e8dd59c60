use serde::{Deserialize, Serialize};

/// Menu action kinds the swapper cares about, carried as the host's numeric
/// id on the wire. Anything else round-trips through `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum MenuAction {
    GameObjectFirstOption,
    GameObjectSecondOption,
    GameObjectThirdOption,
    GameObjectFourthOption,
    GameObjectFifthOption,
    NpcFirstOption,
    NpcSecondOption,
    NpcThirdOption,
    NpcFourthOption,
    NpcFifthOption,
    Walk,
    ItemFirstOption,
    ItemSecondOption,
    ItemThirdOption,
    ItemFourthOption,
    ItemFifthOption,
    ItemUse,
    WidgetDefault,
    ExamineObject,
    ExamineNpc,
    ExamineItem,
    Cancel,
    /// Entries created by the plugin itself.
    Runelite,
    Other(i32),
}

impl MenuAction {
    pub fn id(self) -> i32 {
        match self {
            MenuAction::GameObjectFirstOption => 3,
            MenuAction::GameObjectSecondOption => 4,
            MenuAction::GameObjectThirdOption => 5,
            MenuAction::GameObjectFourthOption => 6,
            MenuAction::GameObjectFifthOption => 1001,
            MenuAction::NpcFirstOption => 9,
            MenuAction::NpcSecondOption => 10,
            MenuAction::NpcThirdOption => 11,
            MenuAction::NpcFourthOption => 12,
            MenuAction::NpcFifthOption => 13,
            MenuAction::Walk => 23,
            MenuAction::ItemFirstOption => 33,
            MenuAction::ItemSecondOption => 34,
            MenuAction::ItemThirdOption => 35,
            MenuAction::ItemFourthOption => 36,
            MenuAction::ItemFifthOption => 37,
            MenuAction::ItemUse => 38,
            MenuAction::WidgetDefault => 57,
            MenuAction::ExamineObject => 1002,
            MenuAction::ExamineNpc => 1003,
            MenuAction::ExamineItem => 1005,
            MenuAction::Cancel => 1006,
            MenuAction::Runelite => 1500,
            MenuAction::Other(id) => id,
        }
    }

    /// Actions that target an NPC, including examine.
    pub fn is_npc_option(self) -> bool {
        matches!(
            self,
            MenuAction::NpcFirstOption
                | MenuAction::NpcSecondOption
                | MenuAction::NpcThirdOption
                | MenuAction::NpcFourthOption
                | MenuAction::NpcFifthOption
                | MenuAction::ExamineNpc
        )
    }
}

impl Default for MenuAction {
    fn default() -> Self {
        MenuAction::Other(0)
    }
}

impl From<i32> for MenuAction {
    fn from(id: i32) -> Self {
        match id {
            3 => MenuAction::GameObjectFirstOption,
            4 => MenuAction::GameObjectSecondOption,
            5 => MenuAction::GameObjectThirdOption,
            6 => MenuAction::GameObjectFourthOption,
            1001 => MenuAction::GameObjectFifthOption,
            9 => MenuAction::NpcFirstOption,
            10 => MenuAction::NpcSecondOption,
            11 => MenuAction::NpcThirdOption,
            12 => MenuAction::NpcFourthOption,
            13 => MenuAction::NpcFifthOption,
            23 => MenuAction::Walk,
            33 => MenuAction::ItemFirstOption,
            34 => MenuAction::ItemSecondOption,
            35 => MenuAction::ItemThirdOption,
            36 => MenuAction::ItemFourthOption,
            37 => MenuAction::ItemFifthOption,
            38 => MenuAction::ItemUse,
            57 => MenuAction::WidgetDefault,
            1002 => MenuAction::ExamineObject,
            1003 => MenuAction::ExamineNpc,
            1005 => MenuAction::ExamineItem,
            1006 => MenuAction::Cancel,
            1500 => MenuAction::Runelite,
            other => MenuAction::Other(other),
        }
    }
}

impl From<MenuAction> for i32 {
    fn from(action: MenuAction) -> Self {
        action.id()
    }
}

/// One selectable line of a context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub option: String,
    pub target: String,
    #[serde(default = "no_identifier")]
    pub identifier: i32,
    #[serde(rename = "type", default)]
    pub action: MenuAction,
    #[serde(default)]
    pub param0: i32,
    #[serde(default)]
    pub param1: i32,
}

fn no_identifier() -> i32 {
    -1
}

impl MenuEntry {
    pub fn new(option: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            target: target.into(),
            identifier: -1,
            action: MenuAction::default(),
            param0: 0,
            param1: 0,
        }
    }

    pub fn with_identifier(mut self, identifier: i32) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn with_action(mut self, action: MenuAction) -> Self {
        self.action = action;
        self
    }

    pub fn with_param1(mut self, param1: i32) -> Self {
        self.param1 = param1;
        self
    }
}

/// Working copy of one tick's menu, in display order: position 0 is the
/// default (left-click) action and larger positions sit further down the
/// menu.
///
/// The host keeps its array the other way round (default entry last), so
/// lists coming from or going back to the host go through
/// [`MenuEntries::from_host_order`] and [`MenuEntries::into_host_order`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuEntries {
    entries: Vec<MenuEntry>,
}

impl MenuEntries {
    pub fn from_host_order(mut entries: Vec<MenuEntry>) -> Self {
        entries.reverse();
        Self { entries }
    }

    pub fn into_host_order(self) -> Vec<MenuEntry> {
        let mut entries = self.entries;
        entries.reverse();
        entries
    }

    /// Builds a working copy from a top-first list.
    pub fn from_display_order(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&MenuEntry> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MenuEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut MenuEntry> {
        self.entries.iter_mut()
    }

    /// The entry a plain left-click would run.
    pub fn default_entry(&self) -> Option<&MenuEntry> {
        self.entries.first()
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
    }

    /// Inserts an entry as the new default action.
    pub fn push_top(&mut self, entry: MenuEntry) {
        self.entries.insert(0, entry);
    }

    /// Index the entry at `position` occupies in the host's array.
    pub fn host_position(&self, position: usize) -> Option<usize> {
        (position < self.entries.len()).then(|| self.entries.len() - 1 - position)
    }

    /// Inverse of [`MenuEntries::host_position`].
    pub fn from_host_position(&self, host_position: usize) -> Option<usize> {
        self.host_position(host_position)
    }

    /// Options in display order, mostly for logging and assertions.
    pub fn options(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.option.as_str()).collect()
    }
}

impl From<Vec<MenuEntry>> for MenuEntries {
    fn from(entries: Vec<MenuEntry>) -> Self {
        Self::from_display_order(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_order_round_trip_reverses_once() {
        let host = vec![
            MenuEntry::new("Cancel", ""),
            MenuEntry::new("Examine", "Banker"),
            MenuEntry::new("Talk-to", "Banker"),
        ];
        let entries = MenuEntries::from_host_order(host.clone());
        assert_eq!(entries.default_entry().map(|e| e.option.as_str()), Some("Talk-to"));
        assert_eq!(entries.options(), vec!["Talk-to", "Examine", "Cancel"]);
        assert_eq!(entries.into_host_order(), host);
    }

    #[test]
    fn host_position_mirrors_display_position() {
        let entries = MenuEntries::from_display_order(vec![
            MenuEntry::new("a", ""),
            MenuEntry::new("b", ""),
            MenuEntry::new("c", ""),
        ]);
        assert_eq!(entries.host_position(0), Some(2));
        assert_eq!(entries.host_position(2), Some(0));
        assert_eq!(entries.from_host_position(1), Some(1));
        assert_eq!(entries.host_position(3), None);
    }

    #[test]
    fn action_ids_round_trip() {
        for id in [9, 13, 1003, 1500, 57, 4242] {
            assert_eq!(MenuAction::from(id).id(), id);
        }
        assert!(MenuAction::ExamineNpc.is_npc_option());
        assert!(!MenuAction::ItemUse.is_npc_option());
    }

    #[test]
    fn swap_moves_whole_entries_back_to_the_host() {
        let bank = MenuEntry {
            param0: 51,
            param1: 50,
            ..MenuEntry::new("Bank", "Banker").with_action(MenuAction::NpcThirdOption)
        };
        let talk = MenuEntry::new("Talk-to", "Banker").with_identifier(7);
        let mut entries = MenuEntries::from_host_order(vec![bank.clone(), talk.clone()]);
        entries.swap(0, 1);
        assert_eq!(entries.into_host_order(), vec![talk, bank]);
    }

    #[test]
    fn push_top_becomes_default() {
        let mut entries = MenuEntries::from(vec![MenuEntry::new("Wield", "Dragon dagger")]);
        entries.push_top(MenuEntry::new("Reset", "Shift-click"));
        assert_eq!(entries.options(), vec!["Reset", "Wield"]);
    }
}
