use std::sync::Arc;

use log::{debug, info, trace};

use crate::client::{Client, GameState, ItemDefinition};
use crate::config::{
    keys, ConfigStore, ConfigWarnings, SwapperConfig, ITEM_KEY_PREFIX, SHIFT_CLICK_GROUP,
    SWAPPER_GROUP,
};
use crate::customize::{MenuClick, OverrideChange, ShiftClickCustomizer};
use crate::menu::MenuEntries;
use crate::overrides::{ItemVariations, OverrideStore};
use crate::rules::{evaluate, GameSnapshot, RuleContext};
use crate::scheduler::{Deferred, SchedulerHandle, TickScheduler};
use crate::sets::SwapSets;
use crate::swap::SwapExecutor;

/// What a client tick did with the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Inactive,
    NotLoggedIn,
    MenuOpen,
    /// The menu was scanned; the count is the number of exchanges made.
    Swapped(usize),
}

/// The menu entry swapper as the host drives it: lifecycle, configuration
/// notifications, input, and the per-tick swap pass.
#[derive(Debug)]
pub struct MenuEntrySwapper {
    store: Arc<dyn ConfigStore>,
    overrides: OverrideStore,
    config: SwapperConfig,
    warnings: ConfigWarnings,
    sets: SwapSets,
    customizer: ShiftClickCustomizer,
    scheduler: TickScheduler,
    active: bool,
}

impl MenuEntrySwapper {
    pub fn new(store: Arc<dyn ConfigStore>, variations: Arc<dyn ItemVariations>) -> Self {
        Self {
            overrides: OverrideStore::new(store.clone(), variations),
            store,
            config: SwapperConfig::default(),
            warnings: ConfigWarnings::default(),
            sets: SwapSets::default(),
            customizer: ShiftClickCustomizer::default(),
            scheduler: TickScheduler::new(),
            active: false,
        }
    }

    /// Sender for configuration notifications coming from other threads.
    pub fn handle(&self) -> SchedulerHandle {
        self.scheduler.handle()
    }

    pub fn start_up(&mut self) {
        self.warnings = ConfigWarnings::default();
        self.reload_config();
        self.sets = SwapSets::from_config(&self.config);
        self.active = true;
        if self.config.shift_click_customization {
            self.set_customization(true);
        }
        info!("menu entry swapper started");
    }

    pub fn shut_down(&mut self) {
        self.set_customization(false);
        self.sets.clear();
        self.active = false;
        info!("menu entry swapper stopped");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> &SwapperConfig {
        &self.config
    }

    pub fn sets(&self) -> &SwapSets {
        &self.sets
    }

    pub fn customizer(&self) -> &ShiftClickCustomizer {
        &self.customizer
    }

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    fn reload_config(&mut self) {
        let (config, errors) = SwapperConfig::read(self.store.as_ref());
        self.warnings.report(errors);
        self.config = config;
    }

    fn set_customization(&mut self, enabled: bool) {
        if self.customizer.set_enabled(enabled) {
            self.scheduler.handle().reset_item_cache();
        }
    }

    pub fn on_shift_key(&mut self, pressed: bool) {
        self.customizer.on_shift_key(pressed);
    }

    pub fn on_focus_changed(&mut self, focused: bool) {
        self.customizer.on_focus_changed(focused);
    }

    pub fn on_inventory_tab_option(&mut self, option: &str, target: &str) {
        self.customizer.on_inventory_tab_option(option, target);
    }

    /// Drains work queued through [`SchedulerHandle`]s, including work queued
    /// while draining. Must be called on the tick thread;
    /// [`MenuEntrySwapper::on_client_tick`] does so first thing.
    ///
    /// Any number of cache reset requests in one drain reset the item
    /// definition cache once, after the configuration changes are applied.
    pub fn run_pending<C: Client>(&mut self, client: &mut C) {
        let mut reset_items = false;
        while let Some(work) = self.scheduler.next() {
            match work {
                Deferred::ResetItemCache => reset_items = true,
                Deferred::ConfigChanged { group, key } => self.apply_config_change(&group, &key),
            }
        }
        if reset_items {
            debug!("resetting item definition cache");
            client.reset_item_definition_cache();
        }
    }

    fn apply_config_change(&mut self, group: &str, key: &str) {
        if !self.active {
            trace!("ignoring {group}.{key} while stopped");
            return;
        }
        if group != SWAPPER_GROUP && group != SHIFT_CLICK_GROUP {
            return;
        }

        self.reload_config();
        if key == keys::SHIFT_CLICK_CUSTOMIZATION {
            self.set_customization(self.config.shift_click_customization);
        } else if key.starts_with(ITEM_KEY_PREFIX) {
            self.scheduler.handle().reset_item_cache();
        } else {
            self.sets.refresh(key, &self.config);
        }
    }

    pub fn on_client_tick<C: Client>(&mut self, client: &mut C) -> TickOutcome {
        self.run_pending(client);

        if !self.active {
            return TickOutcome::Inactive;
        }
        if client.game_state() != GameState::LoggedIn {
            trace!("skipping tick: not logged in");
            return TickOutcome::NotLoggedIn;
        }
        // an open menu is not rebuilt, so swapping it would swap again every tick
        if client.is_menu_open() {
            trace!("skipping tick: menu open");
            return TickOutcome::MenuOpen;
        }

        let mut entries = MenuEntries::from_host_order(client.menu_entries());
        let game = GameSnapshot {
            shift_held: self.customizer.shift_held(),
            hint_arrow_npc: client.hint_arrow_npc(),
            player_region: client.local_player_region(),
        };
        let swaps = self.swap_entries(&mut entries, &game);
        if swaps > 0 {
            debug!("tick made {swaps} swap(s): {:?}", entries.options());
            client.set_menu_entries(entries.into_host_order());
        }
        TickOutcome::Swapped(swaps)
    }

    /// One full swap pass over `entries`, returning the number of exchanges.
    ///
    /// Rules see each entry as it was when the pass began, while directives
    /// act on the live list, so later promotions observe earlier ones.
    /// Entries are visited bottom-up, each bounding its directives to its own
    /// position.
    pub fn swap_entries(&self, entries: &mut MenuEntries, game: &GameSnapshot) -> usize {
        let snapshot = entries.clone();
        let ctx = RuleContext {
            config: &self.config,
            sets: &self.sets,
            overrides: &self.overrides,
            game,
        };
        let mut executor = SwapExecutor::new(entries);

        for (position, entry) in snapshot.iter().enumerate().rev() {
            for directive in evaluate(entry, ctx) {
                executor.apply(entries, &directive, position);
            }
        }
        executor.swaps()
    }

    /// Decorates an inventory menu while configuring shift-click actions.
    pub fn on_menu_opened<C: Client>(&mut self, client: &mut C) -> bool {
        let mut entries = MenuEntries::from_host_order(client.menu_entries());
        if !self.customizer.on_menu_opened(&mut entries, &*client) {
            return false;
        }
        client.set_menu_entries(entries.into_host_order());
        true
    }

    /// Persists the override a click on a decorated entry selects.
    pub fn on_menu_option_clicked<C: Client>(
        &mut self,
        client: &C,
        click: &MenuClick,
    ) -> Option<OverrideChange> {
        let change = self.customizer.on_menu_option_clicked(click, client)?;
        let item_id = match change {
            OverrideChange::Set { item_id, index } => {
                self.overrides.set(item_id, index);
                item_id
            }
            OverrideChange::Unset { item_id } => {
                self.overrides.unset(item_id);
                item_id
            }
        };
        self.scheduler
            .handle()
            .config_changed(SHIFT_CLICK_GROUP, self.overrides.key_for(item_id));
        Some(change)
    }

    /// Applies a stored override to a definition the host just loaded.
    pub fn on_post_item_definition(&self, item: &mut ItemDefinition) {
        if let Some(index) = self.overrides.get(item.id) {
            item.shift_click_action_index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;
    use crate::menu::MenuEntry;
    use crate::overrides::NoVariations;

    fn swapper(pairs: &[(&str, &str)]) -> (Arc<MemoryConfigStore>, MenuEntrySwapper) {
        let store = Arc::new(MemoryConfigStore::from_entries(
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        ));
        let mut swapper = MenuEntrySwapper::new(store.clone(), Arc::new(NoVariations));
        swapper.start_up();
        (store, swapper)
    }

    fn menu(options: &[&str], target: &str) -> MenuEntries {
        MenuEntries::from_display_order(
            options
                .iter()
                .map(|option| MenuEntry::new(*option, target))
                .collect(),
        )
    }

    #[test]
    fn swap_pass_promotes_bank() {
        let (_, swapper) = swapper(&[]);
        let mut entries = menu(&["Talk-to", "Bank", "Examine"], "Banker");
        assert_eq!(swapper.swap_entries(&mut entries, &GameSnapshot::default()), 1);
        assert_eq!(entries.options(), vec!["Bank", "Talk-to", "Examine"]);
    }

    #[test]
    fn assignment_lands_above_trade() {
        let (_, swapper) = swapper(&[]);
        let mut entries = menu(&["Talk-to", "Trade", "Assignment", "Examine"], "Nieve");
        swapper.swap_entries(&mut entries, &GameSnapshot::default());
        assert_eq!(entries.options()[0], "Assignment");
    }

    #[test]
    fn config_changes_apply_on_drain() {
        let (store, mut swapper) = swapper(&[]);
        store.set(SWAPPER_GROUP, keys::BUY_10, "Feather");
        store.set(SWAPPER_GROUP, "swapBank", "false");
        assert!(swapper.sets().buy_10.is_empty());

        let handle = swapper.handle();
        handle.config_changed(SWAPPER_GROUP, keys::BUY_10);
        handle.config_changed(SWAPPER_GROUP, "swapBank");
        handle.config_changed("other", keys::BUY_5);
        let mut nothing = NullClient::default();
        swapper.run_pending(&mut nothing);

        assert!(swapper.sets().buy_10.contains("feather"));
        assert!(!swapper.config().swap_bank);
    }

    #[test]
    fn drop_list_edited_after_start_is_lowercased() {
        let (store, mut swapper) = swapper(&[]);
        store.set(SWAPPER_GROUP, keys::DROP_ITEMS, "Oak logs, LOGS");
        swapper
            .handle()
            .config_changed(SWAPPER_GROUP, keys::DROP_ITEMS);
        swapper.run_pending(&mut NullClient::default());

        let mut entries = menu(&["Use", "Drop"], "Logs");
        assert_eq!(swapper.swap_entries(&mut entries, &GameSnapshot::default()), 1);
        assert_eq!(entries.options(), vec!["Drop", "Use"]);
    }

    #[test]
    fn buy_list_edited_after_start_is_lowercased() {
        let (store, mut swapper) = swapper(&[("menuentryswapper.enableValueSwap", "true")]);
        let mut entries = menu(&["Value", "Buy 5", "Buy 1"], "Feather");
        swapper.swap_entries(&mut entries, &GameSnapshot::default());
        assert_eq!(entries.options()[0], "Value");

        store.set(SWAPPER_GROUP, keys::BUY_1, "FeAtHeR");
        swapper.handle().config_changed(SWAPPER_GROUP, keys::BUY_1);
        swapper.run_pending(&mut NullClient::default());

        let mut entries = menu(&["Value", "Buy 5", "Buy 1"], "Feather");
        assert_eq!(swapper.swap_entries(&mut entries, &GameSnapshot::default()), 1);
        assert_eq!(entries.options(), vec!["Buy 1", "Buy 5", "Value"]);
    }

    #[test]
    fn toggling_customization_resets_item_cache() {
        let (store, mut swapper) = swapper(&[]);
        let mut client = NullClient::default();
        swapper.run_pending(&mut client);
        assert_eq!(client.cache_resets, 1);

        store.set(SWAPPER_GROUP, keys::SHIFT_CLICK_CUSTOMIZATION, "false");
        swapper
            .handle()
            .config_changed(SWAPPER_GROUP, keys::SHIFT_CLICK_CUSTOMIZATION);
        swapper.run_pending(&mut client);
        assert!(!swapper.customizer().is_enabled());
        assert_eq!(client.cache_resets, 2);
    }

    #[test]
    fn override_writes_reset_item_cache_once_per_drain() {
        let (store, mut swapper) = swapper(&[]);
        let mut client = NullClient::default();
        swapper.run_pending(&mut client);
        assert_eq!(client.cache_resets, 1);

        store.set(SHIFT_CLICK_GROUP, "item_1712", "3");
        let handle = swapper.handle();
        handle.config_changed(SHIFT_CLICK_GROUP, "item_1712");
        handle.config_changed(SHIFT_CLICK_GROUP, "item_1712");
        handle.config_changed(SHIFT_CLICK_GROUP, "item_4151");
        swapper.run_pending(&mut client);
        assert_eq!(client.cache_resets, 2);

        swapper.run_pending(&mut client);
        assert_eq!(client.cache_resets, 2);
    }

    #[test]
    fn stopped_swapper_leaves_menu_alone() {
        let (_, mut swapper) = swapper(&[]);
        swapper.shut_down();
        let mut client = NullClient::default();
        assert_eq!(swapper.on_client_tick(&mut client), TickOutcome::Inactive);
        assert!(swapper.sets().withdraw_amount.is_empty());
    }

    #[derive(Default)]
    struct NullClient {
        cache_resets: usize,
    }

    impl crate::client::ItemCatalog for NullClient {
        fn item_definition(&self, _id: i32) -> Option<ItemDefinition> {
            None
        }
    }

    impl Client for NullClient {
        fn game_state(&self) -> GameState {
            GameState::LoggedIn
        }

        fn is_menu_open(&self) -> bool {
            false
        }

        fn menu_entries(&self) -> Vec<MenuEntry> {
            Vec::new()
        }

        fn set_menu_entries(&mut self, _entries: Vec<MenuEntry>) {}

        fn reset_item_definition_cache(&mut self) {
            self.cache_resets += 1;
        }
    }
}
