use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use log::warn;
use thiserror::Error;

use crate::modes::{
    ArdyCloakMode, BlessingMode, DesertAmuletMode, DigsiteMode, DuelRingMode, FairyRingMode,
    FishingCapeMode, GamesNecklaceMode, GloryMode, HouseAdvertisementMode, HouseMode,
    KaramGloveMode, MaxCapeMode, MemoirsMode, MoryLegsMode, XericsTalismanMode,
};

/// Group holding the swapper's own toggles and lists.
pub const SWAPPER_GROUP: &str = "menuentryswapper";
/// Group holding the per-item shift-click overrides.
pub const SHIFT_CLICK_GROUP: &str = "shiftclick";
pub const ITEM_KEY_PREFIX: &str = "item_";

/// Keys whose change needs more than a snapshot reload.
pub mod keys {
    pub const SHIFT_CLICK_CUSTOMIZATION: &str = "shiftClickCustomization";
    pub const BUY_1: &str = "buy1";
    pub const BUY_5: &str = "buy5";
    pub const BUY_10: &str = "buy10";
    pub const BUY_50: &str = "buy50";
    pub const WITHDRAW_5: &str = "withdraw5";
    pub const WITHDRAW_10: &str = "withdraw10";
    pub const WITHDRAW_X: &str = "withdrawX";
    pub const WITHDRAW_ALL: &str = "withdrawAll";
    pub const X_AMOUNT: &str = "xAmount";
    pub const CUSTOM_SWAP: &str = "customSwap";
    pub const DROP_ITEMS: &str = "dropItems";
}

/// Host key/value configuration, string valued and scoped by group.
///
/// Implementations are shared between the host's worker thread (writes) and
/// the tick thread (reads), hence `&self` everywhere.
///
/// Writes made through [`ConfigStore::set`] and [`ConfigStore::unset`] by the
/// swapper itself must not be echoed back as change notifications: the
/// swapper queues its own notification for every override it writes. Hosts
/// forward only changes that originate outside the swapper.
pub trait ConfigStore: Send + Sync {
    fn get(&self, group: &str, key: &str) -> Option<String>;
    fn set(&self, group: &str, key: &str, value: &str);
    fn unset(&self, group: &str, key: &str);
}

impl fmt::Debug for dyn ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConfigStore")
    }
}

/// In-process store keyed `group.key`.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// Copy of every `group.key` pair, sorted by key.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn full_key(group: &str, key: &str) -> String {
        format!("{group}.{key}")
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&Self::full_key(group, key))
            .cloned()
    }

    fn set(&self, group: &str, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Self::full_key(group, key), value.to_string());
    }

    fn unset(&self, group: &str, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&Self::full_key(group, key));
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq, Hash)]
pub enum ConfigError {
    #[error("{key}: expected true or false, found {value:?}")]
    InvalidFlag { key: String, value: String },
    #[error("{key}: expected an integer, found {value:?}")]
    InvalidInteger { key: String, value: String },
    #[error("{key}: unknown mode {value:?}")]
    InvalidMode { key: String, value: String },
}

/// Typed reader over one configuration group.
struct ConfigReader<'a> {
    store: &'a dyn ConfigStore,
    group: &'a str,
    errors: RefCell<Vec<ConfigError>>,
}

impl<'a> ConfigReader<'a> {
    fn new(store: &'a dyn ConfigStore, group: &'a str) -> Self {
        Self {
            store,
            group,
            errors: RefCell::new(Vec::new()),
        }
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.store
            .get(self.group, key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn parse_flag(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        let Some(value) = self.raw(key) else {
            return Ok(None);
        };
        match value.to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidFlag {
                key: key.to_string(),
                value,
            }),
        }
    }

    fn parse_int(&self, key: &str) -> Result<Option<i32>, ConfigError> {
        let Some(value) = self.raw(key) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidInteger {
                key: key.to_string(),
                value,
            })
    }

    fn parse_mode<M: FromStr>(&self, key: &str) -> Result<Option<M>, ConfigError> {
        let Some(value) = self.raw(key) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidMode {
                key: key.to_string(),
                value,
            })
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        self.fallback(self.parse_flag(key), default)
    }

    fn int(&self, key: &str, default: i32) -> i32 {
        self.fallback(self.parse_int(key), default)
    }

    fn mode<M: FromStr>(&self, key: &str, default: M) -> M {
        self.fallback(self.parse_mode(key), default)
    }

    fn text(&self, key: &str) -> String {
        self.store.get(self.group, key).unwrap_or_default()
    }

    fn fallback<T>(&self, parsed: Result<Option<T>, ConfigError>, default: T) -> T {
        match parsed {
            Ok(value) => value.unwrap_or(default),
            Err(err) => {
                self.errors.borrow_mut().push(err);
                default
            }
        }
    }

    fn into_errors(self) -> Vec<ConfigError> {
        self.errors.into_inner()
    }
}

/// Malformed values already reported, so that reloading the group on every
/// notification warns once per bad value instead of once per reload.
#[derive(Debug, Default)]
pub struct ConfigWarnings {
    reported: HashSet<ConfigError>,
}

impl ConfigWarnings {
    /// Logs the errors not seen on the previous reload and returns how many
    /// that was. A value that is fixed and later broken again warns again.
    pub fn report(&mut self, errors: Vec<ConfigError>) -> usize {
        let mut fresh = 0;
        for err in &errors {
            if !self.reported.contains(err) {
                warn!("ignoring configuration value: {err}");
                fresh += 1;
            }
        }
        self.reported = errors.into_iter().collect();
        fresh
    }
}

/// Snapshot of the swapper's configuration group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapperConfig {
    pub swap_bank: bool,
    pub swap_contract: bool,
    pub swap_exchange: bool,
    pub swap_dark_mage: bool,
    pub swap_assignment: bool,
    pub swap_trade: bool,
    pub swap_travel: bool,
    pub swap_pay: bool,
    pub swap_decant: bool,
    pub swap_quick: bool,
    pub swap_enchant: bool,
    pub swap_harpoon: bool,
    pub swap_box_trap: bool,
    pub swap_chase: bool,
    pub swap_birdhouse_empty: bool,
    pub swap_admire: bool,
    pub swap_private: bool,
    pub swap_pick: bool,
    pub swap_teleport_item: bool,
    pub swap_teleport_from_equipped: bool,
    pub swap_bones: bool,
    pub enable_value_swap: bool,
    pub enable_banking_swap: bool,
    pub shift_click_customization: bool,
    pub swap_teleport_spell: bool,
    pub swap_pickpocket: bool,
    pub swap_abyss_teleport: bool,
    pub swap_hardwood_grove: bool,
    pub claim_slime: bool,
    pub swap_quick_leave: bool,
    pub swap_start_minigame: bool,

    pub swap_home_portal: HouseMode,
    pub swap_house_advertisement: HouseAdvertisementMode,
    pub swap_fairy_ring: FairyRingMode,
    pub swap_ardy: ArdyCloakMode,
    pub swap_mory_legs: MoryLegsMode,
    pub swap_duel_ring: DuelRingMode,
    pub swap_max_cape: MaxCapeMode,
    pub swap_glory: GloryMode,
    pub swap_xerics: XericsTalismanMode,
    pub swap_games: GamesNecklaceMode,
    pub swap_digsite: DigsiteMode,
    pub swap_memoirs: MemoirsMode,
    pub swap_desert: DesertAmuletMode,
    pub swap_karam_gloves: KaramGloveMode,
    pub swap_fishing_cape: FishingCapeMode,
    pub swap_blessing: BlessingMode,

    pub buy_1: String,
    pub buy_5: String,
    pub buy_10: String,
    pub buy_50: String,
    pub withdraw_5: String,
    pub withdraw_10: String,
    pub withdraw_x: String,
    pub withdraw_all: String,
    pub custom_swap: String,
    pub drop_items: String,
    pub x_amount: i32,
}

impl Default for SwapperConfig {
    fn default() -> Self {
        Self {
            swap_bank: true,
            swap_contract: true,
            swap_exchange: true,
            swap_dark_mage: true,
            swap_assignment: true,
            swap_trade: true,
            swap_travel: true,
            swap_pay: true,
            swap_decant: false,
            swap_quick: true,
            swap_enchant: true,
            swap_harpoon: false,
            swap_box_trap: true,
            swap_chase: true,
            swap_birdhouse_empty: true,
            swap_admire: true,
            swap_private: false,
            swap_pick: false,
            swap_teleport_item: false,
            swap_teleport_from_equipped: false,
            swap_bones: false,
            enable_value_swap: false,
            enable_banking_swap: false,
            shift_click_customization: true,
            swap_teleport_spell: false,
            swap_pickpocket: false,
            swap_abyss_teleport: true,
            swap_hardwood_grove: false,
            claim_slime: false,
            swap_quick_leave: false,
            swap_start_minigame: false,
            swap_home_portal: HouseMode::Home,
            swap_house_advertisement: HouseAdvertisementMode::View,
            swap_fairy_ring: FairyRingMode::LastDestination,
            swap_ardy: ArdyCloakMode::Off,
            swap_mory_legs: MoryLegsMode::Off,
            swap_duel_ring: DuelRingMode::Off,
            swap_max_cape: MaxCapeMode::Off,
            swap_glory: GloryMode::Off,
            swap_xerics: XericsTalismanMode::Off,
            swap_games: GamesNecklaceMode::Off,
            swap_digsite: DigsiteMode::Off,
            swap_memoirs: MemoirsMode::Off,
            swap_desert: DesertAmuletMode::Off,
            swap_karam_gloves: KaramGloveMode::Off,
            swap_fishing_cape: FishingCapeMode::Off,
            swap_blessing: BlessingMode::Off,
            buy_1: String::new(),
            buy_5: String::new(),
            buy_10: String::new(),
            buy_50: String::new(),
            withdraw_5: String::new(),
            withdraw_10: String::new(),
            withdraw_x: String::new(),
            withdraw_all: String::new(),
            custom_swap: String::new(),
            drop_items: String::new(),
            x_amount: 1,
        }
    }
}

impl SwapperConfig {
    /// Every swap family off and every mode at its neutral value.
    pub fn disabled() -> Self {
        Self {
            swap_bank: false,
            swap_contract: false,
            swap_exchange: false,
            swap_dark_mage: false,
            swap_assignment: false,
            swap_trade: false,
            swap_travel: false,
            swap_pay: false,
            swap_quick: false,
            swap_enchant: false,
            swap_box_trap: false,
            swap_chase: false,
            swap_birdhouse_empty: false,
            swap_admire: false,
            shift_click_customization: false,
            swap_abyss_teleport: false,
            swap_home_portal: HouseMode::Enter,
            swap_fairy_ring: FairyRingMode::Off,
            ..Self::default()
        }
    }

    /// Reads the swapper group, falling back to the default of any key that
    /// is missing or malformed, and warns about every malformed value.
    pub fn load(store: &dyn ConfigStore) -> Self {
        let (config, errors) = Self::read(store);
        for err in errors {
            warn!("ignoring configuration value: {err}");
        }
        config
    }

    /// Like [`SwapperConfig::load`], but hands the malformed values back
    /// instead of logging them.
    pub fn read(store: &dyn ConfigStore) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let reader = ConfigReader::new(store, SWAPPER_GROUP);

        let config = Self {
            swap_bank: reader.flag("swapBank", defaults.swap_bank),
            swap_contract: reader.flag("swapContract", defaults.swap_contract),
            swap_exchange: reader.flag("swapExchange", defaults.swap_exchange),
            swap_dark_mage: reader.flag("swapDarkMage", defaults.swap_dark_mage),
            swap_assignment: reader.flag("swapAssignment", defaults.swap_assignment),
            swap_trade: reader.flag("swapTrade", defaults.swap_trade),
            swap_travel: reader.flag("swapTravel", defaults.swap_travel),
            swap_pay: reader.flag("swapPay", defaults.swap_pay),
            swap_decant: reader.flag("swapDecant", defaults.swap_decant),
            swap_quick: reader.flag("swapQuick", defaults.swap_quick),
            swap_enchant: reader.flag("swapEnchant", defaults.swap_enchant),
            swap_harpoon: reader.flag("swapHarpoon", defaults.swap_harpoon),
            swap_box_trap: reader.flag("swapBoxTrap", defaults.swap_box_trap),
            swap_chase: reader.flag("swapChase", defaults.swap_chase),
            swap_birdhouse_empty: reader
                .flag("swapBirdhouseEmpty", defaults.swap_birdhouse_empty),
            swap_admire: reader.flag("swapAdmire", defaults.swap_admire),
            swap_private: reader.flag("swapPrivate", defaults.swap_private),
            swap_pick: reader.flag("swapPick", defaults.swap_pick),
            swap_teleport_item: reader.flag("swapTeleportItem", defaults.swap_teleport_item),
            swap_teleport_from_equipped: reader.flag(
                "swapTeleportFromEquipped",
                defaults.swap_teleport_from_equipped,
            ),
            swap_bones: reader.flag("swapBones", defaults.swap_bones),
            enable_value_swap: reader.flag("enableValueSwap", defaults.enable_value_swap),
            enable_banking_swap: reader.flag("enableBankingSwap", defaults.enable_banking_swap),
            shift_click_customization: reader.flag(
                keys::SHIFT_CLICK_CUSTOMIZATION,
                defaults.shift_click_customization,
            ),
            swap_teleport_spell: reader.flag("swapTeleportSpell", defaults.swap_teleport_spell),
            swap_pickpocket: reader.flag("swapPickpocket", defaults.swap_pickpocket),
            swap_abyss_teleport: reader.flag("swapAbyssTeleport", defaults.swap_abyss_teleport),
            swap_hardwood_grove: reader.flag("swapHardWoodGrove", defaults.swap_hardwood_grove),
            claim_slime: reader.flag("claimSlime", defaults.claim_slime),
            swap_quick_leave: reader.flag("swapQuickLeave", defaults.swap_quick_leave),
            swap_start_minigame: reader.flag("swapStartMinigame", defaults.swap_start_minigame),

            swap_home_portal: reader.mode("swapHomePortal", defaults.swap_home_portal),
            swap_house_advertisement: reader
                .mode("swapHouseAdvertisement", defaults.swap_house_advertisement),
            swap_fairy_ring: reader.mode("swapFairyRing", defaults.swap_fairy_ring),
            swap_ardy: reader.mode("swapArdy", defaults.swap_ardy),
            swap_mory_legs: reader.mode("swapMoryLegs", defaults.swap_mory_legs),
            swap_duel_ring: reader.mode("swapDA", defaults.swap_duel_ring),
            swap_max_cape: reader.mode("swapMaxCape", defaults.swap_max_cape),
            swap_glory: reader.mode("swapGlory", defaults.swap_glory),
            swap_xerics: reader.mode("swapXerics", defaults.swap_xerics),
            swap_games: reader.mode("swapGames", defaults.swap_games),
            swap_digsite: reader.mode("swapDigsite", defaults.swap_digsite),
            swap_memoirs: reader.mode("swapMemoirs", defaults.swap_memoirs),
            swap_desert: reader.mode("swapDesert", defaults.swap_desert),
            swap_karam_gloves: reader.mode("swapKaramGloves", defaults.swap_karam_gloves),
            swap_fishing_cape: reader.mode("swapFishingCape", defaults.swap_fishing_cape),
            swap_blessing: reader.mode("swapBlessing", defaults.swap_blessing),

            buy_1: reader.text(keys::BUY_1),
            buy_5: reader.text(keys::BUY_5),
            buy_10: reader.text(keys::BUY_10),
            buy_50: reader.text(keys::BUY_50),
            withdraw_5: reader.text(keys::WITHDRAW_5),
            withdraw_10: reader.text(keys::WITHDRAW_10),
            withdraw_x: reader.text(keys::WITHDRAW_X),
            withdraw_all: reader.text(keys::WITHDRAW_ALL),
            custom_swap: reader.text(keys::CUSTOM_SWAP),
            drop_items: reader.text(keys::DROP_ITEMS),
            x_amount: reader.int(keys::X_AMOUNT, defaults.x_amount),
        };
        (config, reader.into_errors())
    }
}
