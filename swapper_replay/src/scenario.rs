use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use swapper_core::config::SHIFT_CLICK_GROUP;
use swapper_core::{
    Client, ConfigStore, GameState, ItemCatalog, ItemDefinition, MenuClick, MenuEntry,
    MenuEntrySwapper, OverrideChange, TickOutcome,
};

use crate::store::{JsonConfigStore, JsonPrimitive};

/// A recorded session: initial configuration, the item definitions the host
/// would serve, and the events to feed the swapper in order.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// `group.key` → value, applied on top of the loaded store.
    #[serde(default)]
    pub config: BTreeMap<String, JsonPrimitive>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
    /// Variant item id → canonical item id.
    #[serde(default)]
    pub variations: HashMap<i32, i32>,
    #[serde(default)]
    pub region: Option<i32>,
    #[serde(default)]
    pub hint_arrow_npc: Option<i32>,
    #[serde(default = "logged_in")]
    pub game_state: GameState,
    pub events: Vec<ScenarioEvent>,
}

fn logged_in() -> GameState {
    GameState::LoggedIn
}

/// Menu lists are written top-first.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScenarioEvent {
    Tick {
        entries: Vec<MenuEntry>,
        #[serde(default)]
        menu_open: bool,
    },
    Shift {
        pressed: bool,
    },
    Focus {
        focused: bool,
    },
    /// Writes (or, without a value, removes) a key and notifies the swapper
    /// from a worker thread.
    Config {
        group: String,
        key: String,
        #[serde(default)]
        value: Option<JsonPrimitive>,
    },
    InventoryTab {
        option: String,
        target: String,
    },
    MenuOpened {
        entries: Vec<MenuEntry>,
    },
    /// Clicks the entry at `position` of the menu currently shown.
    MenuClicked {
        position: usize,
    },
}

impl ScenarioEvent {
    fn name(&self) -> &'static str {
        match self {
            ScenarioEvent::Tick { .. } => "tick",
            ScenarioEvent::Shift { .. } => "shift",
            ScenarioEvent::Focus { .. } => "focus",
            ScenarioEvent::Config { .. } => "config",
            ScenarioEvent::InventoryTab { .. } => "inventory_tab",
            ScenarioEvent::MenuOpened { .. } => "menu_opened",
            ScenarioEvent::MenuClicked { .. } => "menu_clicked",
        }
    }
}

impl Scenario {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse scenario json: {}", path.display()))
    }
}

/// Host double for the replay: keeps the menu in host order and serves the
/// scenario's item definitions.
#[derive(Debug, Default)]
pub struct ReplayClient {
    state: GameState,
    menu_open: bool,
    host_entries: Vec<MenuEntry>,
    items: HashMap<i32, ItemDefinition>,
    hint_arrow_npc: Option<i32>,
    region: Option<i32>,
    cache_resets: usize,
}

impl ReplayClient {
    fn show(&mut self, top_first: Vec<MenuEntry>) {
        self.host_entries = top_first.into_iter().rev().collect();
    }

    fn displayed(&self) -> impl Iterator<Item = &MenuEntry> {
        self.host_entries.iter().rev()
    }
}

impl ItemCatalog for ReplayClient {
    fn item_definition(&self, id: i32) -> Option<ItemDefinition> {
        self.items.get(&id).cloned()
    }
}

impl Client for ReplayClient {
    fn game_state(&self) -> GameState {
        self.state
    }

    fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        self.host_entries.clone()
    }

    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>) {
        self.host_entries = entries;
    }

    fn hint_arrow_npc(&self) -> Option<i32> {
        self.hint_arrow_npc
    }

    fn local_player_region(&self) -> Option<i32> {
        self.region
    }

    fn reset_item_definition_cache(&mut self) {
        self.cache_resets += 1;
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuLine {
    pub option: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swaps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    /// Menu after the step, top-first.
    pub menu: Vec<MenuLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepReport>,
    pub total_swaps: usize,
    pub cache_resets: usize,
    /// `item_<id>` → stored action index.
    pub overrides: BTreeMap<String, String>,
    /// Item id → shift-click option after overrides are applied.
    pub shift_click: BTreeMap<i32, String>,
}

fn describe_outcome(outcome: TickOutcome) -> (String, Option<usize>) {
    match outcome {
        TickOutcome::Inactive => ("inactive".to_string(), None),
        TickOutcome::NotLoggedIn => ("not_logged_in".to_string(), None),
        TickOutcome::MenuOpen => ("menu_open".to_string(), None),
        TickOutcome::Swapped(swaps) => ("swapped".to_string(), Some(swaps)),
    }
}

fn describe_change(change: OverrideChange) -> String {
    match change {
        OverrideChange::Set { item_id, index } => format!("set {item_id} -> {index}"),
        OverrideChange::Unset { item_id } => format!("unset {item_id}"),
    }
}

/// Feeds every event of `scenario` through a fresh swapper backed by `store`.
pub fn replay(scenario: Scenario, store: Arc<JsonConfigStore>) -> Result<ReplayReport> {
    for (full_key, value) in scenario.config {
        let Some((group, key)) = full_key.split_once('.') else {
            bail!("config key {full_key:?} must be written group.key");
        };
        store.set(group, key, &value.into_config_string());
    }

    let mut client = ReplayClient {
        state: scenario.game_state,
        items: scenario
            .items
            .into_iter()
            .map(|item| (item.id, item))
            .collect(),
        hint_arrow_npc: scenario.hint_arrow_npc,
        region: scenario.region,
        ..ReplayClient::default()
    };
    let mut swapper = MenuEntrySwapper::new(store.clone(), Arc::new(scenario.variations));
    swapper.start_up();

    let mut steps = Vec::with_capacity(scenario.events.len());
    let mut total_swaps = 0;
    for (step, event) in scenario.events.into_iter().enumerate() {
        let name = event.name();
        let mut report = StepReport {
            step,
            event: name,
            outcome: None,
            swaps: None,
            change: None,
            menu: Vec::new(),
        };

        match event {
            ScenarioEvent::Tick { entries, menu_open } => {
                client.show(entries);
                client.menu_open = menu_open;
                let (outcome, swaps) = describe_outcome(swapper.on_client_tick(&mut client));
                total_swaps += swaps.unwrap_or(0);
                report.outcome = Some(outcome);
                report.swaps = swaps;
            }
            ScenarioEvent::Shift { pressed } => swapper.on_shift_key(pressed),
            ScenarioEvent::Focus { focused } => swapper.on_focus_changed(focused),
            ScenarioEvent::Config { group, key, value } => {
                match value {
                    Some(value) => store.set(&group, &key, &value.into_config_string()),
                    None => store.unset(&group, &key),
                }
                let handle = swapper.handle();
                std::thread::spawn(move || handle.config_changed(group, key))
                    .join()
                    .map_err(|_| anyhow::anyhow!("config notifier thread panicked"))?;
            }
            ScenarioEvent::InventoryTab { option, target } => {
                swapper.on_inventory_tab_option(&option, &target);
            }
            ScenarioEvent::MenuOpened { entries } => {
                client.show(entries);
                let decorated = swapper.on_menu_opened(&mut client);
                report.outcome = Some(if decorated { "decorated" } else { "unchanged" }.into());
            }
            ScenarioEvent::MenuClicked { position } => {
                let Some(entry) = client.displayed().nth(position).cloned() else {
                    bail!("step {step}: no menu entry at position {position}");
                };
                let change = swapper.on_menu_option_clicked(&client, &MenuClick::from_entry(&entry));
                report.change = change.map(describe_change);
            }
        }

        report.menu = client
            .displayed()
            .map(|entry| MenuLine {
                option: entry.option.clone(),
                target: entry.target.clone(),
            })
            .collect();
        debug!("step {step} ({name}) done");
        steps.push(report);
    }

    swapper.run_pending(&mut client);
    let shift_click = client
        .items
        .values()
        .map(|item| {
            let mut item = item.clone();
            swapper.on_post_item_definition(&mut item);
            (item.id, item.shift_click_option().to_string())
        })
        .collect();
    swapper.shut_down();
    swapper.run_pending(&mut client);

    info!("replayed {} step(s), {total_swaps} swap(s)", steps.len());
    Ok(ReplayReport {
        steps,
        total_swaps,
        cache_resets: client.cache_resets,
        overrides: store.group(SHIFT_CLICK_GROUP),
        shift_click,
    })
}
