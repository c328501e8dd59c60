pub mod client;
pub mod config;
pub mod custom;
pub mod customize;
pub mod index;
pub mod menu;
pub mod modes;
pub mod overrides;
pub mod plugin;
pub mod rules;
pub mod scheduler;
pub mod sets;
pub mod swap;
pub mod text;

pub use client::{Client, GameState, ItemCatalog, ItemDefinition};
pub use config::{ConfigError, ConfigStore, ConfigWarnings, MemoryConfigStore, SwapperConfig};
pub use custom::{CustomSwap, CustomSwapError};
pub use customize::{MenuClick, OverrideChange, ShiftClickCustomizer};
pub use menu::{MenuAction, MenuEntries, MenuEntry};
pub use overrides::{ItemVariations, NoVariations, OverrideStore};
pub use plugin::{MenuEntrySwapper, TickOutcome};
pub use rules::{evaluate, GameSnapshot, RuleContext, SwapRule, RULES};
pub use scheduler::{Deferred, SchedulerHandle, TickScheduler};
pub use swap::{apply_directive, MatchMode, SwapDirective, SwapExecutor};
