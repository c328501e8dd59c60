use std::collections::HashSet;

use log::debug;

use crate::config::{keys, SwapperConfig};
use crate::custom::{parse_custom_swaps, CustomSwap};
use crate::text::csv_set;

/// Lookup state derived from the CSV lists and `xAmount`.
///
/// Built on start-up, refreshed one key at a time as configuration changes
/// are drained, and cleared on shut-down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapSets {
    pub buy_1: HashSet<String>,
    pub buy_5: HashSet<String>,
    pub buy_10: HashSet<String>,
    pub buy_50: HashSet<String>,
    pub withdraw_5: HashSet<String>,
    pub withdraw_10: HashSet<String>,
    pub withdraw_x: HashSet<String>,
    pub withdraw_all: HashSet<String>,
    pub drop_items: HashSet<String>,
    pub custom_swaps: Vec<CustomSwap>,
    pub withdraw_amount: String,
    pub deposit_amount: String,
}

impl SwapSets {
    pub fn from_config(config: &SwapperConfig) -> Self {
        let (withdraw_amount, deposit_amount) = amount_labels(config.x_amount);
        Self {
            buy_1: csv_set(&config.buy_1),
            buy_5: csv_set(&config.buy_5),
            buy_10: csv_set(&config.buy_10),
            buy_50: csv_set(&config.buy_50),
            withdraw_5: csv_set(&config.withdraw_5),
            withdraw_10: csv_set(&config.withdraw_10),
            withdraw_x: csv_set(&config.withdraw_x),
            withdraw_all: csv_set(&config.withdraw_all),
            drop_items: csv_set(&config.drop_items),
            custom_swaps: parse_custom_swaps(&config.custom_swap),
            withdraw_amount,
            deposit_amount,
        }
    }

    /// Rebuilds only the state derived from `key`. Returns `false` for keys
    /// that feed nothing here.
    pub fn refresh(&mut self, key: &str, config: &SwapperConfig) -> bool {
        match key {
            keys::BUY_1 => self.buy_1 = csv_set(&config.buy_1),
            keys::BUY_5 => self.buy_5 = csv_set(&config.buy_5),
            keys::BUY_10 => self.buy_10 = csv_set(&config.buy_10),
            keys::BUY_50 => self.buy_50 = csv_set(&config.buy_50),
            keys::WITHDRAW_5 => self.withdraw_5 = csv_set(&config.withdraw_5),
            keys::WITHDRAW_10 => self.withdraw_10 = csv_set(&config.withdraw_10),
            keys::WITHDRAW_X => self.withdraw_x = csv_set(&config.withdraw_x),
            keys::WITHDRAW_ALL => self.withdraw_all = csv_set(&config.withdraw_all),
            keys::DROP_ITEMS => self.drop_items = csv_set(&config.drop_items),
            keys::CUSTOM_SWAP => self.custom_swaps = parse_custom_swaps(&config.custom_swap),
            keys::X_AMOUNT => {
                (self.withdraw_amount, self.deposit_amount) = amount_labels(config.x_amount);
            }
            _ => return false,
        }
        debug!("refreshed swap lists for {key}");
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn amount_labels(amount: i32) -> (String, String) {
    (format!("withdraw-{amount}"), format!("deposit-{amount}"))
}
