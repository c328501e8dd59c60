//! The ordered swap rule table.
//!
//! Primary rules form a first-match chain: the first one whose trigger holds
//! for an entry emits its promotions and the rest of the chain is skipped.
//! Supplementary rules (custom swaps, shop values, banking amounts, drop,
//! teleport spells) are evaluated for every entry after the chain.

use crate::config::SwapperConfig;
use crate::menu::MenuEntry;
use crate::modes::{
    ArdyCloakMode, FairyRingMode, HouseAdvertisementMode, HouseMode, MaxCapeMode, MoryLegsMode,
    TeleportMode,
};
use crate::overrides::OverrideStore;
use crate::sets::SwapSets;
use crate::swap::SwapDirective;
use crate::text::normalize;

/// Region containing the Crafting Guild.
const CRAFTING_GUILD_REGION: i32 = 11571;

/// Host state sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub shift_held: bool,
    pub hint_arrow_npc: Option<i32>,
    pub player_region: Option<i32>,
}

/// Everything a rule may consult besides the entry itself.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a SwapperConfig,
    pub sets: &'a SwapSets,
    pub overrides: &'a OverrideStore,
    pub game: &'a GameSnapshot,
}

/// One entry as the rules see it: normalized text plus the raw entry.
#[derive(Debug)]
pub struct RuleInput<'a> {
    pub option: String,
    pub target: String,
    pub entry: &'a MenuEntry,
    pub ctx: RuleContext<'a>,
}

impl<'a> RuleInput<'a> {
    pub fn new(entry: &'a MenuEntry, ctx: RuleContext<'a>) -> Self {
        Self {
            option: normalize(&entry.option),
            target: normalize(&entry.target),
            entry,
            ctx,
        }
    }

    fn config(&self) -> &'a SwapperConfig {
        self.ctx.config
    }

    fn sets(&self) -> &'a SwapSets {
        self.ctx.sets
    }

    fn is(&self, option: &str) -> bool {
        self.option == option
    }

    fn on(&self, option: &str, target: &str) -> bool {
        self.option == option && self.target == target
    }
}

/// Collects the promotions emitted for one entry. Unless stated otherwise a
/// directive promotes over the entry's own option on the entry's target.
#[derive(Debug)]
pub struct Directives {
    option: String,
    target: String,
    directives: Vec<SwapDirective>,
}

impl Directives {
    fn new(input: &RuleInput<'_>) -> Self {
        Self {
            option: input.option.clone(),
            target: input.target.clone(),
            directives: Vec::new(),
        }
    }

    pub fn exact(&mut self, promote: impl Into<String>) {
        let directive = SwapDirective::exact(promote, self.option.clone(), self.target.clone());
        self.directives.push(directive);
    }

    pub fn contains(&mut self, promote: impl Into<String>) {
        let directive =
            SwapDirective::contains(promote, self.option.clone(), self.target.clone());
        self.directives.push(directive);
    }

    /// Promotion looked up on a different target than the entry's.
    pub fn exact_on(&mut self, promote: impl Into<String>, target: impl Into<String>) {
        let directive = SwapDirective::exact(promote, self.option.clone(), target);
        self.directives.push(directive);
    }

    pub fn into_vec(self) -> Vec<SwapDirective> {
        self.directives
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStage {
    Primary,
    Supplementary,
}

#[derive(Clone, Copy)]
pub struct SwapRule {
    pub name: &'static str,
    pub stage: RuleStage,
    pub applies: fn(&RuleInput<'_>) -> bool,
    pub emit: fn(&RuleInput<'_>, &mut Directives),
}

impl std::fmt::Debug for SwapRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapRule")
            .field("name", &self.name)
            .field("stage", &self.stage)
            .finish()
    }
}

const fn primary(
    name: &'static str,
    applies: fn(&RuleInput<'_>) -> bool,
    emit: fn(&RuleInput<'_>, &mut Directives),
) -> SwapRule {
    SwapRule {
        name,
        stage: RuleStage::Primary,
        applies,
        emit,
    }
}

const fn supplementary(
    name: &'static str,
    applies: fn(&RuleInput<'_>) -> bool,
    emit: fn(&RuleInput<'_>, &mut Directives),
) -> SwapRule {
    SwapRule {
        name,
        stage: RuleStage::Supplementary,
        applies,
        emit,
    }
}

pub static RULES: &[SwapRule] = &[
    primary("talk-to", |i| i.is("talk-to"), talk_to),
    primary(
        "quick-leave",
        |i| i.config().swap_quick_leave && i.on("leave tomb", "tomb door"),
        |_, out| out.exact("quick-leave"),
    ),
    primary(
        "energy-barrier",
        |i| i.config().swap_travel && i.on("pass", "energy barrier"),
        |_, out| out.exact("pay-toll(2-ecto)"),
    ),
    primary(
        "toll-gate",
        |i| i.config().swap_travel && i.on("open", "gate"),
        |_, out| out.exact("pay-toll(10gp)"),
    ),
    primary(
        "hardwood-grove",
        |i| i.config().swap_hardwood_grove && i.on("open", "hardwood grove doors"),
        |_, out| out.exact("quick-pay(100)"),
    ),
    primary(
        "trapdoor",
        |i| i.config().swap_travel && i.on("inspect", "trapdoor"),
        |_, out| out.exact("travel"),
    ),
    primary(
        "harpoon-cage",
        |i| i.config().swap_harpoon && i.is("cage"),
        |_, out| out.exact("harpoon"),
    ),
    primary(
        "harpoon-net",
        |i| i.config().swap_harpoon && (i.is("big net") || i.is("net")),
        |_, out| out.exact("harpoon"),
    ),
    primary(
        "home-portal",
        |i| i.config().swap_home_portal != HouseMode::Enter && i.is("enter"),
        home_portal,
    ),
    primary(
        "house-advertisement",
        |i| i.config().swap_house_advertisement != HouseAdvertisementMode::View && i.is("view"),
        house_advertisement,
    ),
    primary(
        "fairy-ring",
        |i| {
            !matches!(
                i.config().swap_fairy_ring,
                FairyRingMode::Off | FairyRingMode::Zanaris
            ) && (i.is("zanaris") || i.is("configure") || i.is("tree"))
        },
        fairy_ring,
    ),
    primary(
        "fairy-ring-zanaris",
        |i| i.config().swap_fairy_ring == FairyRingMode::Zanaris && i.is("tree"),
        |_, out| out.contains("zanaris"),
    ),
    primary(
        "box-trap-reset",
        |i| i.config().swap_box_trap && (i.is("check") || i.is("dismantle")),
        |_, out| out.exact("reset"),
    ),
    primary(
        "box-trap-lay",
        |i| i.config().swap_box_trap && i.is("take"),
        |_, out| out.exact("lay"),
    ),
    primary(
        "chase",
        |i| i.config().swap_chase && i.is("pick-up"),
        |_, out| out.exact("chase"),
    ),
    primary(
        "birdhouse",
        |i| i.config().swap_birdhouse_empty && i.is("interact") && i.target.contains("birdhouse"),
        |_, out| out.exact("empty"),
    ),
    primary(
        "quick-enter",
        |i| i.config().swap_quick && i.is("enter"),
        |_, out| out.exact("quick-enter"),
    ),
    primary(
        "quick-ring",
        |i| i.config().swap_quick && i.is("ring"),
        |_, out| out.exact("quick-start"),
    ),
    primary(
        "quick-pass",
        |i| i.config().swap_quick && i.is("pass"),
        |_, out| {
            out.exact("quick-pass");
            out.exact("quick pass");
        },
    ),
    primary(
        "quick-open",
        |i| i.config().swap_quick && i.is("open"),
        |_, out| out.exact("quick-open"),
    ),
    primary(
        "quick-climb-down",
        |i| i.config().swap_quick && i.is("climb-down"),
        |_, out| {
            out.exact("quick-start");
            out.exact("pay");
        },
    ),
    primary(
        "admire",
        |i| i.config().swap_admire && i.is("admire"),
        |_, out| {
            out.exact("teleport");
            out.exact("spellbook");
            out.exact("perks");
        },
    ),
    primary(
        "private",
        |i| i.config().swap_private && i.is("shared"),
        |_, out| out.exact("private"),
    ),
    primary(
        "pick",
        |i| i.config().swap_pick && i.is("pick"),
        |_, out| out.exact("pick-lots"),
    ),
    primary(
        "shift-click-use",
        |i| i.config().shift_click_customization && i.ctx.game.shift_held && !i.is("use"),
        |i, out| {
            if i.ctx.overrides.get(i.entry.identifier) == Some(-1) {
                out.exact("use");
            }
        },
    ),
    primary(
        "teleport-item",
        |i| {
            i.config().swap_teleport_item
                && ["wear", "remove", "wield", "equip"].contains(&i.option.as_str())
        },
        teleport_item,
    ),
    primary(
        "wield",
        |i| i.is("wield"),
        |i, out| {
            if i.config().swap_teleport_item {
                out.exact("teleport");
            }
        },
    ),
    primary(
        "bones",
        |i| i.config().swap_bones && i.is("bury"),
        |_, out| out.exact("use"),
    ),
    supplementary("custom", |i| !i.sets().custom_swaps.is_empty(), custom),
    supplementary(
        "value",
        |i| i.config().enable_value_swap && i.is("value"),
        value,
    ),
    supplementary(
        "banking",
        |i| {
            i.config().enable_banking_swap
                && ["withdraw-1", "deposit-1", "store", "donate"].contains(&i.option.as_str())
        },
        banking,
    ),
    supplementary(
        "drop",
        |i| !i.sets().drop_items.is_empty() && i.is("use"),
        |i, out| {
            if i.sets().drop_items.contains(&i.target) {
                out.exact("drop");
            }
        },
    ),
    supplementary(
        "teleport-spell",
        |i| i.ctx.game.shift_held && i.config().swap_teleport_spell,
        teleport_spell,
    ),
];

/// NPC options on the NPC the hint arrow points at are never swapped.
fn targets_hinted_npc(entry: &MenuEntry, game: &GameSnapshot) -> bool {
    game.hint_arrow_npc == Some(entry.identifier) && entry.action.is_npc_option()
}

/// Promotions for one entry, in the order they must be applied.
pub fn evaluate(entry: &MenuEntry, ctx: RuleContext<'_>) -> Vec<SwapDirective> {
    if targets_hinted_npc(entry, ctx.game) {
        return Vec::new();
    }

    let input = RuleInput::new(entry, ctx);
    let mut out = Directives::new(&input);

    if let Some(rule) = RULES
        .iter()
        .filter(|rule| rule.stage == RuleStage::Primary)
        .find(|rule| (rule.applies)(&input))
    {
        (rule.emit)(&input, &mut out);
    }

    for rule in RULES
        .iter()
        .filter(|rule| rule.stage == RuleStage::Supplementary)
    {
        if (rule.applies)(&input) {
            (rule.emit)(&input, &mut out);
        }
    }

    out.into_vec()
}

fn should_swap_pickpocket(target: &str) -> bool {
    !target.starts_with("villager")
        && !target.starts_with("bandit")
        && !target.starts_with("menaphite thug")
}

fn talk_to(i: &RuleInput<'_>, out: &mut Directives) {
    let config = i.config();
    let target = i.target.as_str();

    if config.swap_pickpocket && should_swap_pickpocket(target) {
        out.exact("pickpocket");
    }
    if config.swap_abyss_teleport && target.contains("mage of zamorak") {
        out.exact("teleport");
    }
    if config.swap_hardwood_grove && target.contains("rionasta") {
        out.exact("send-parcel");
    }
    if config.swap_bank {
        out.exact("bank");
    }
    if config.swap_contract {
        out.exact("contract");
    }
    if config.swap_exchange {
        out.exact("exchange");
    }
    if config.swap_dark_mage {
        out.exact("repairs");
    }
    // slayer masters offer both; assignment wins
    if config.swap_assignment {
        out.exact("assignment");
    }
    if config.swap_trade {
        for promote in ["trade", "trade-with", "shop"] {
            out.exact(promote);
        }
    }
    if config.claim_slime && target == "robin" {
        out.exact("claim-slime");
    }
    if config.swap_travel {
        for promote in [
            "travel",
            "pay-fare",
            "charter",
            "take-boat",
            "fly",
            "jatizso",
            "neitiznot",
            "rellekka",
            "follow",
            "transport",
        ] {
            out.exact(promote);
        }
    }
    if config.swap_pay {
        out.exact("pay");
        out.contains("pay (");
    }
    if config.swap_decant {
        out.exact("decant");
    }
    if config.swap_quick {
        out.exact("quick-travel");
    }
    if config.swap_enchant {
        out.exact("enchant");
    }
    if config.swap_start_minigame {
        out.exact("start-minigame");
    }
}

fn home_portal(i: &RuleInput<'_>, out: &mut Directives) {
    match i.config().swap_home_portal {
        HouseMode::Home => out.exact("home"),
        HouseMode::BuildMode => out.exact("build mode"),
        HouseMode::FriendsHouse => out.exact("friend's house"),
        HouseMode::Enter => {}
    }
}

fn house_advertisement(i: &RuleInput<'_>, out: &mut Directives) {
    match i.config().swap_house_advertisement {
        HouseAdvertisementMode::AddHouse => out.exact("add-house"),
        HouseAdvertisementMode::VisitLast => out.exact("visit-last"),
        HouseAdvertisementMode::View => {}
    }
}

fn fairy_ring(i: &RuleInput<'_>, out: &mut Directives) {
    match i.config().swap_fairy_ring {
        FairyRingMode::LastDestination => out.contains("last-destination"),
        FairyRingMode::Configure => out.contains("configure"),
        FairyRingMode::Zanaris | FairyRingMode::Off => {}
    }
}

fn push_mode(out: &mut Directives, mode: impl TeleportMode) {
    if let Some(option) = mode.menu_option() {
        out.exact(option);
    }
}

fn teleport_item(i: &RuleInput<'_>, out: &mut Directives) {
    let config = i.config();
    let wearing = i.is("wear");
    let removing = i.is("remove") && config.swap_teleport_from_equipped;

    if wearing {
        match config.swap_ardy {
            ArdyCloakMode::Farm => out.exact("farm teleport"),
            ArdyCloakMode::Monastery => out.exact("monastery teleport"),
            ArdyCloakMode::Off => {}
        }
        push_mode(out, config.swap_mory_legs);
    }

    if removing {
        match config.swap_ardy {
            ArdyCloakMode::Farm => out.exact("ardougne farm"),
            ArdyCloakMode::Monastery => out.exact("kandarin monastery"),
            ArdyCloakMode::Off => {}
        }
        match config.swap_mory_legs {
            MoryLegsMode::Burgh => out.exact("burgh de rott"),
            MoryLegsMode::Ecto => out.exact("ectofuntus pit"),
            MoryLegsMode::Off => {}
        }
        push_mode(out, config.swap_duel_ring);
        match config.swap_max_cape {
            MaxCapeMode::Crafting if i.ctx.game.player_region == Some(CRAFTING_GUILD_REGION) => {
                out.exact("tele to poh")
            }
            MaxCapeMode::Crafting => out.exact("crafting guild"),
            MaxCapeMode::TeleHouse => out.exact("tele to poh"),
            MaxCapeMode::Off => {}
        }
        push_mode(out, config.swap_glory);
        push_mode(out, config.swap_xerics);
        push_mode(out, config.swap_games);
        push_mode(out, config.swap_digsite);
        push_mode(out, config.swap_memoirs);
        out.exact("warriors' guild");
    }

    if wearing || removing {
        push_mode(out, config.swap_desert);
        push_mode(out, config.swap_karam_gloves);
        push_mode(out, config.swap_fishing_cape);
    }

    if i.is("equip") || removing {
        push_mode(out, config.swap_blessing);
    }

    if i.target.contains("construct. cape(t)") {
        out.exact("tele to poh");
    } else {
        out.exact("teleport");
    }
    out.exact("lava maze");
    out.exact("rub");
}

fn custom(i: &RuleInput<'_>, out: &mut Directives) {
    for swap in &i.sets().custom_swaps {
        if swap.matches(&i.option, &i.target) {
            out.exact_on(swap.new_option.clone(), swap.new_target.clone());
        }
    }
}

fn value(i: &RuleInput<'_>, out: &mut Directives) {
    let sets = i.sets();
    let amount = [
        (&sets.buy_1, "1"),
        (&sets.buy_5, "5"),
        (&sets.buy_10, "10"),
        (&sets.buy_50, "50"),
    ]
    .into_iter()
    .find(|(set, _)| set.contains(&i.target))
    .map(|(_, amount)| amount);

    if let Some(amount) = amount {
        out.exact(format!("buy {amount}"));
        out.exact(format!("sell {amount}"));
    }
}

fn banking(i: &RuleInput<'_>, out: &mut Directives) {
    let sets = i.sets();
    let fixed = |out: &mut Directives, amount: &str| {
        for verb in ["withdraw", "deposit", "store", "donate"] {
            out.exact(format!("{verb}-{amount}"));
        }
    };

    if sets.withdraw_5.contains(&i.target) {
        fixed(out, "5");
    } else if sets.withdraw_10.contains(&i.target) {
        fixed(out, "10");
    } else if sets.withdraw_x.contains(&i.target) {
        out.exact(sets.withdraw_amount.clone());
        out.exact(sets.deposit_amount.clone());
    } else if sets.withdraw_all.contains(&i.target) {
        fixed(out, "all");
    }
}

fn teleport_spell(i: &RuleInput<'_>, out: &mut Directives) {
    let alternate = match i.target.as_str() {
        "varrock teleport" => "grand exchange",
        "camelot teleport" => "seers'",
        "watchtower teleport" => "yanille",
        "teleport to house" => "outside",
        _ => return,
    };

    if i.is("cast") {
        out.exact(alternate);
    } else if i.is(alternate) {
        out.exact("cast");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;
    use crate::menu::MenuAction;
    use crate::modes::{
        BlessingMode, DesertAmuletMode, FishingCapeMode, GloryMode, KaramGloveMode, MemoirsMode,
    };
    use crate::overrides::NoVariations;
    use std::collections::HashSet;
    use std::sync::Arc;

    struct Fixture {
        config: SwapperConfig,
        sets: SwapSets,
        overrides: OverrideStore,
        game: GameSnapshot,
    }

    impl Fixture {
        fn new(config: SwapperConfig) -> Self {
            let sets = SwapSets::from_config(&config);
            Self {
                config,
                sets,
                overrides: OverrideStore::new(
                    Arc::new(MemoryConfigStore::new()),
                    Arc::new(NoVariations),
                ),
                game: GameSnapshot::default(),
            }
        }

        fn ctx(&self) -> RuleContext<'_> {
            RuleContext {
                config: &self.config,
                sets: &self.sets,
                overrides: &self.overrides,
                game: &self.game,
            }
        }

        fn promotions(&self, option: &str, target: &str) -> Vec<String> {
            self.promotions_for(&MenuEntry::new(option, target))
        }

        fn promotions_for(&self, entry: &MenuEntry) -> Vec<String> {
            evaluate(entry, self.ctx())
                .into_iter()
                .map(|directive| directive.promote)
                .collect()
        }
    }

    fn enabled(configure: impl FnOnce(&mut SwapperConfig)) -> Fixture {
        let mut config = SwapperConfig::disabled();
        configure(&mut config);
        Fixture::new(config)
    }

    #[test]
    fn rule_names_are_unique_and_primary_first() {
        let names: HashSet<_> = RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(names.len(), RULES.len());
        let first_supplementary = RULES
            .iter()
            .position(|rule| rule.stage == RuleStage::Supplementary)
            .unwrap();
        assert!(RULES[first_supplementary..]
            .iter()
            .all(|rule| rule.stage == RuleStage::Supplementary));
    }

    #[test]
    fn disabled_config_emits_nothing() {
        let fixture = Fixture::new(SwapperConfig::disabled());
        for (option, target) in [
            ("Talk-to", "Banker"),
            ("Enter", "Portal"),
            ("Zanaris", "Fairy ring"),
            ("Wear", "Ardougne cloak 4"),
            ("Value", "Feather"),
            ("Withdraw-1", "Coins"),
            ("Use", "Logs"),
            ("Cast", "Varrock Teleport"),
            ("Wield", "Dragon dagger"),
        ] {
            assert!(
                fixture.promotions(option, target).is_empty(),
                "{option} on {target}"
            );
        }
    }

    #[test]
    fn assignment_is_emitted_before_trade() {
        let fixture = enabled(|config| {
            config.swap_assignment = true;
            config.swap_trade = true;
        });
        assert_eq!(
            fixture.promotions("Talk-to", "<col=ffff00>Nieve"),
            vec!["assignment", "trade", "trade-with", "shop"]
        );
    }

    #[test]
    fn talk_to_respects_target_conditions() {
        let fixture = enabled(|config| {
            config.swap_pickpocket = true;
            config.claim_slime = true;
            config.swap_abyss_teleport = true;
        });
        assert_eq!(fixture.promotions("Talk-to", "Man"), vec!["pickpocket"]);
        assert!(fixture.promotions("Talk-to", "Villager").is_empty());
        assert_eq!(
            fixture.promotions("Talk-to", "Menaphite Thug"),
            Vec::<String>::new()
        );
        assert_eq!(
            fixture.promotions("Talk-to", "Robin"),
            vec!["pickpocket", "claim-slime"]
        );
        assert_eq!(
            fixture.promotions("Talk-to", "Mage of Zamorak"),
            vec!["pickpocket", "teleport"]
        );
    }

    #[test]
    fn pay_adds_a_contains_directive() {
        let fixture = enabled(|config| config.swap_pay = true);
        let directives = evaluate(&MenuEntry::new("Talk-to", "Trader Crewmember"), fixture.ctx());
        assert_eq!(
            directives,
            vec![
                SwapDirective::exact("pay", "talk-to", "trader crewmember"),
                SwapDirective::contains("pay (", "talk-to", "trader crewmember"),
            ]
        );
    }

    #[test]
    fn first_matching_primary_rule_wins() {
        // both the home portal rule and quick-enter trigger on "enter"
        let fixture = enabled(|config| {
            config.swap_home_portal = HouseMode::BuildMode;
            config.swap_quick = true;
        });
        assert_eq!(fixture.promotions("Enter", "Portal"), vec!["build mode"]);

        let fixture = enabled(|config| config.swap_quick = true);
        assert_eq!(fixture.promotions("Enter", "Portal"), vec!["quick-enter"]);
    }

    #[test]
    fn travel_objects_need_exact_targets() {
        let fixture = enabled(|config| config.swap_travel = true);
        assert_eq!(fixture.promotions("Open", "Gate"), vec!["pay-toll(10gp)"]);
        assert!(fixture.promotions("Open", "Large gate").is_empty());
        assert_eq!(
            fixture.promotions("Pass", "Energy Barrier"),
            vec!["pay-toll(2-ecto)"]
        );
        assert_eq!(fixture.promotions("Inspect", "Trapdoor"), vec!["travel"]);
    }

    #[test]
    fn fairy_ring_modes() {
        let fixture = enabled(|config| config.swap_fairy_ring = FairyRingMode::LastDestination);
        let directives = evaluate(&MenuEntry::new("Zanaris", "Fairy ring"), fixture.ctx());
        assert_eq!(
            directives,
            vec![SwapDirective::contains("last-destination", "zanaris", "fairy ring")]
        );

        let fixture = enabled(|config| config.swap_fairy_ring = FairyRingMode::Zanaris);
        assert_eq!(fixture.promotions("Tree", "Fairy ring"), vec!["zanaris"]);
        assert!(fixture.promotions("Configure", "Fairy ring").is_empty());
    }

    #[test]
    fn hint_arrow_npc_is_left_alone() {
        let mut fixture = enabled(|config| config.swap_bank = true);
        fixture.game.hint_arrow_npc = Some(1234);
        let hinted = MenuEntry::new("Talk-to", "Banker")
            .with_identifier(1234)
            .with_action(MenuAction::NpcFirstOption);
        assert!(fixture.promotions_for(&hinted).is_empty());

        let other = hinted.clone().with_identifier(99);
        assert_eq!(fixture.promotions_for(&other), vec!["bank"]);

        let object = hinted.with_action(MenuAction::GameObjectFirstOption);
        assert_eq!(fixture.promotions_for(&object), vec!["bank"]);
    }

    #[test]
    fn shift_click_use_follows_the_item_override() {
        let mut fixture = enabled(|config| config.shift_click_customization = true);
        fixture.game.shift_held = true;
        fixture.overrides.set(1712, -1);
        let glory = MenuEntry::new("Wear", "Amulet of glory(4)").with_identifier(1712);
        assert_eq!(fixture.promotions_for(&glory), vec!["use"]);

        fixture.overrides.set(1712, 3);
        assert!(fixture.promotions_for(&glory).is_empty());

        fixture.game.shift_held = false;
        fixture.overrides.set(1712, -1);
        assert!(fixture.promotions_for(&glory).is_empty());
    }

    #[test]
    fn teleport_item_on_wear_and_remove() {
        let fixture = enabled(|config| {
            config.swap_teleport_item = true;
            config.swap_ardy = ArdyCloakMode::Farm;
            config.swap_mory_legs = MoryLegsMode::Burgh;
        });
        assert_eq!(
            fixture.promotions("Wear", "Ardougne cloak 4"),
            vec!["farm teleport", "burgh teleport", "teleport", "lava maze", "rub"]
        );
        // equipped teleports need teleport-from-equipped
        assert_eq!(
            fixture.promotions("Remove", "Ardougne cloak 4"),
            vec!["teleport", "lava maze", "rub"]
        );

        let fixture = enabled(|config| {
            config.swap_teleport_item = true;
            config.swap_teleport_from_equipped = true;
            config.swap_ardy = ArdyCloakMode::Monastery;
            config.swap_glory = GloryMode::Edgeville;
            config.swap_memoirs = MemoirsMode::Hosidius;
        });
        assert_eq!(
            fixture.promotions("Remove", "Amulet of glory(4)"),
            vec![
                "kandarin monastery",
                "edgeville",
                "lunch by the lancalliums",
                "warriors' guild",
                "teleport",
                "lava maze",
                "rub",
            ]
        );
    }

    #[test]
    fn max_cape_crafting_depends_on_region() {
        let mut fixture = enabled(|config| {
            config.swap_teleport_item = true;
            config.swap_teleport_from_equipped = true;
            config.swap_max_cape = MaxCapeMode::Crafting;
        });
        assert_eq!(
            fixture.promotions("Remove", "Max cape")[0],
            "crafting guild"
        );
        fixture.game.player_region = Some(CRAFTING_GUILD_REGION);
        assert_eq!(fixture.promotions("Remove", "Max cape")[0], "tele to poh");
    }

    #[test]
    fn construction_cape_teleports_home() {
        let fixture = enabled(|config| config.swap_teleport_item = true);
        assert_eq!(
            fixture.promotions("Wear", "Construct. cape(t)"),
            vec!["tele to poh", "lava maze", "rub"]
        );
    }

    #[test]
    fn jewellery_modes_follow_wear_equip_and_remove() {
        let modes = |config: &mut SwapperConfig| {
            config.swap_teleport_item = true;
            config.swap_desert = DesertAmuletMode::Nardah;
            config.swap_karam_gloves = KaramGloveMode::GemMine;
            config.swap_fishing_cape = FishingCapeMode::FishingGuild;
            config.swap_blessing = BlessingMode::MountKaruulm;
        };

        let fixture = enabled(modes);
        assert_eq!(
            fixture.promotions("Wear", "Desert amulet 4"),
            vec!["nardah", "gem mine", "fishing guild", "teleport", "lava maze", "rub"]
        );
        assert_eq!(
            fixture.promotions("Equip", "Rada's blessing 4"),
            vec!["mount karuulm", "teleport", "lava maze", "rub"]
        );
        assert_eq!(
            fixture.promotions("Remove", "Desert amulet 4"),
            vec!["teleport", "lava maze", "rub"]
        );

        let fixture = enabled(|config| {
            modes(config);
            config.swap_teleport_from_equipped = true;
        });
        assert_eq!(
            fixture.promotions("Remove", "Rada's blessing 4"),
            vec![
                "warriors' guild",
                "nardah",
                "gem mine",
                "fishing guild",
                "mount karuulm",
                "teleport",
                "lava maze",
                "rub",
            ]
        );
        assert!(fixture.promotions("Rub", "Desert amulet 4").is_empty());

        let fixture = enabled(|config| {
            modes(config);
            config.swap_teleport_item = false;
        });
        assert!(fixture.promotions("Wear", "Desert amulet 4").is_empty());
        assert!(fixture.promotions("Equip", "Rada's blessing 4").is_empty());
    }

    /// Checks each `(option, target, promotions)` case with the family turned
    /// on, then again with every family off.
    fn assert_family(configure: fn(&mut SwapperConfig), cases: &[(&str, &str, &[&str])]) {
        let on = enabled(configure);
        let off = Fixture::new(SwapperConfig::disabled());
        for (option, target, expected) in cases {
            assert_eq!(on.promotions(option, target), *expected, "{option} on {target}");
            assert!(
                off.promotions(option, target).is_empty(),
                "{option} on {target} with the family off"
            );
        }
    }

    #[test]
    fn house_advertisement_modes() {
        assert_family(
            |config| config.swap_house_advertisement = HouseAdvertisementMode::AddHouse,
            &[
                ("View", "House Advertisement", &["add-house"]),
                ("Read", "House Advertisement", &[]),
            ],
        );
        assert_family(
            |config| config.swap_house_advertisement = HouseAdvertisementMode::VisitLast,
            &[("View", "House Advertisement", &["visit-last"])],
        );
    }

    #[test]
    fn box_trap_resets_and_lays() {
        assert_family(
            |config| config.swap_box_trap = true,
            &[
                ("Check", "Box trap", &["reset"]),
                ("Dismantle", "Box trap", &["reset"]),
                ("Take", "Box trap", &["lay"]),
                ("Examine", "Box trap", &[]),
            ],
        );
    }

    #[test]
    fn birdhouse_matches_target_substring() {
        assert_family(
            |config| config.swap_birdhouse_empty = true,
            &[
                ("Interact", "Oak birdhouse", &["empty"]),
                ("Interact", "<col=ffff>Redwood birdhouse", &["empty"]),
                ("Interact", "Bird snare", &[]),
                ("Empty", "Oak birdhouse", &[]),
            ],
        );
    }

    #[test]
    fn quick_climb_down_prefers_quick_start_then_pay() {
        assert_family(
            |config| config.swap_quick = true,
            &[
                ("Climb-down", "Ladder", &["quick-start", "pay"]),
                ("Climb-up", "Ladder", &[]),
            ],
        );
    }

    #[test]
    fn admire_promotes_teleport_spellbook_and_perks() {
        assert_family(
            |config| config.swap_admire = true,
            &[
                ("Admire", "Mounted Xeric's talisman", &["teleport", "spellbook", "perks"]),
                ("Remove", "Mounted Xeric's talisman", &[]),
            ],
        );
    }

    #[test]
    fn harpoon_replaces_cage_and_nets() {
        assert_family(
            |config| config.swap_harpoon = true,
            &[
                ("Cage", "Fishing spot", &["harpoon"]),
                ("Big Net", "Fishing spot", &["harpoon"]),
                ("Net", "Fishing spot", &["harpoon"]),
                ("Bait", "Fishing spot", &[]),
            ],
        );
    }

    #[test]
    fn private_pick_and_quick_leave() {
        assert_family(
            |config| config.swap_private = true,
            &[
                ("Shared", "Tithe farm door", &["private"]),
                ("Private", "Tithe farm door", &[]),
            ],
        );
        assert_family(
            |config| config.swap_pick = true,
            &[("Pick", "Cabbage", &["pick-lots"]), ("Take", "Cabbage", &[])],
        );
        assert_family(
            |config| config.swap_quick_leave = true,
            &[
                ("Leave Tomb", "Tomb Door", &["quick-leave"]),
                ("Leave Tomb", "Door", &[]),
            ],
        );
    }

    #[test]
    fn hardwood_grove_doors_and_rionasta() {
        assert_family(
            |config| config.swap_hardwood_grove = true,
            &[
                ("Open", "Hardwood grove doors", &["quick-pay(100)"]),
                ("Open", "Door", &[]),
                ("Talk-to", "Rionasta", &["send-parcel"]),
            ],
        );
    }

    #[test]
    fn value_and_banking_use_first_matching_list() {
        let fixture = enabled(|config| {
            config.enable_value_swap = true;
            config.enable_banking_swap = true;
            config.buy_5 = "Feather".into();
            config.buy_50 = "Feather".into();
            config.withdraw_x = "Coal".into();
            config.x_amount = 27;
        });
        assert_eq!(
            fixture.promotions("Value", "Feather"),
            vec!["buy 5", "sell 5"]
        );
        assert_eq!(
            fixture.promotions("Withdraw-1", "Coal"),
            vec!["withdraw-27", "deposit-27"]
        );
        assert!(fixture.promotions("Withdraw-1", "Iron ore").is_empty());
    }

    #[test]
    fn custom_swap_searches_its_own_target() {
        let fixture = enabled(|config| config.custom_swap = "trade|bank:bank|banker".into());
        let directives = evaluate(&MenuEntry::new("Trade", "Ghost banker"), fixture.ctx());
        assert_eq!(
            directives,
            vec![SwapDirective::exact("bank", "trade", "banker")]
        );
    }

    #[test]
    fn drop_applies_after_primary_chain() {
        let fixture = enabled(|config| {
            config.swap_bones = true;
            config.drop_items = "Bones".into();
        });
        assert_eq!(fixture.promotions("Bury", "Bones"), vec!["use"]);
        assert_eq!(fixture.promotions("Use", "Bones"), vec!["drop"]);
    }

    #[test]
    fn teleport_spell_alternates_with_shift() {
        let mut fixture = enabled(|config| config.swap_teleport_spell = true);
        assert!(fixture.promotions("Cast", "Varrock Teleport").is_empty());
        fixture.game.shift_held = true;
        assert_eq!(
            fixture.promotions("Cast", "<col=00ff00>Varrock Teleport"),
            vec!["grand exchange"]
        );
        assert_eq!(
            fixture.promotions("Seers'", "Camelot Teleport"),
            vec!["cast"]
        );
        assert!(fixture.promotions("Cast", "Lumbridge Home Teleport").is_empty());
    }
}
