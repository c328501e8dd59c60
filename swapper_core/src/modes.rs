//! Enumerated configuration modes.
//!
//! Stored values use the upper-snake variant names (`FARM`, `BUILD_MODE`);
//! display labels are what the game shows and, lowercased, the menu option
//! the swapper promotes.

use std::fmt;

use strum::{Display, EnumString};

/// A teleport sub-mode whose lowercased label is the option to promote.
pub trait TeleportMode: fmt::Display + Copy {
    fn is_off(self) -> bool;

    fn menu_option(self) -> Option<String> {
        (!self.is_off()).then(|| self.to_string().to_lowercase())
    }
}

macro_rules! teleport_modes {
    ($($mode:ty),* $(,)?) => {
        $(
            impl TeleportMode for $mode {
                fn is_off(self) -> bool {
                    self == <$mode>::Off
                }
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum HouseMode {
    #[default]
    #[strum(to_string = "Enter", serialize = "ENTER")]
    Enter,
    #[strum(to_string = "Home", serialize = "HOME")]
    Home,
    #[strum(to_string = "Build mode", serialize = "BUILD_MODE")]
    BuildMode,
    #[strum(to_string = "Friend's house", serialize = "FRIENDS_HOUSE")]
    FriendsHouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum HouseAdvertisementMode {
    #[default]
    #[strum(to_string = "View", serialize = "VIEW")]
    View,
    #[strum(to_string = "Add-House", serialize = "ADD_HOUSE")]
    AddHouse,
    #[strum(to_string = "Visit-Last", serialize = "VISIT_LAST")]
    VisitLast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FairyRingMode {
    #[default]
    #[strum(to_string = "Last-destination", serialize = "LAST_DESTINATION")]
    LastDestination,
    #[strum(to_string = "Configure", serialize = "CONFIGURE")]
    Configure,
    #[strum(to_string = "Zanaris", serialize = "ZANARIS")]
    Zanaris,
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ArdyCloakMode {
    #[strum(to_string = "Farm", serialize = "FARM")]
    Farm,
    #[strum(to_string = "Monastery", serialize = "MONASTERY")]
    Monastery,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MoryLegsMode {
    #[strum(to_string = "Ecto Teleport", serialize = "ECTO")]
    Ecto,
    #[strum(to_string = "Burgh Teleport", serialize = "BURGH")]
    Burgh,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DuelRingMode {
    #[strum(to_string = "Duel Arena", serialize = "DUEL_ARENA")]
    DuelArena,
    #[strum(to_string = "Castle Wars", serialize = "CASTLE_WARS")]
    CastleWars,
    #[strum(to_string = "Clan Wars", serialize = "CLAN_WARS")]
    ClanWars,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MaxCapeMode {
    #[strum(to_string = "Crafting Guild", serialize = "CRAFTING")]
    Crafting,
    #[strum(to_string = "Tele to POH", serialize = "TELE_HOUSE")]
    TeleHouse,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum GloryMode {
    #[strum(to_string = "Edgeville", serialize = "EDGEVILLE")]
    Edgeville,
    #[strum(to_string = "Karamja", serialize = "KARAMJA")]
    Karamja,
    #[strum(to_string = "Draynor Village", serialize = "DRAYNOR_VILLAGE")]
    DraynorVillage,
    #[strum(to_string = "Al Kharid", serialize = "AL_KHARID")]
    AlKharid,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum XericsTalismanMode {
    #[strum(to_string = "Xeric's Look-out", serialize = "XERICS_LOOKOUT")]
    XericsLookout,
    #[strum(to_string = "Xeric's Glade", serialize = "XERICS_GLADE")]
    XericsGlade,
    #[strum(to_string = "Xeric's Inferno", serialize = "XERICS_INFERNO")]
    XericsInferno,
    #[strum(to_string = "Xeric's Heart", serialize = "XERICS_HEART")]
    XericsHeart,
    #[strum(to_string = "Xeric's Honour", serialize = "XERICS_HONOUR")]
    XericsHonour,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum GamesNecklaceMode {
    #[strum(to_string = "Burthorpe", serialize = "BURTHORPE")]
    Burthorpe,
    #[strum(to_string = "Barbarian Outpost", serialize = "BARBARIAN_OUTPOST")]
    BarbarianOutpost,
    #[strum(to_string = "Corporeal Beast", serialize = "CORPOREAL_BEAST")]
    CorporealBeast,
    #[strum(to_string = "Tears of Guthix", serialize = "TEARS_OF_GUTHIX")]
    TearsOfGuthix,
    #[strum(to_string = "Wintertodt Camp", serialize = "WINTERTODT")]
    Wintertodt,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DigsiteMode {
    #[strum(to_string = "Digsite", serialize = "DIGSITE")]
    Digsite,
    #[strum(to_string = "Fossil Island", serialize = "FOSSIL_ISLAND")]
    FossilIsland,
    #[strum(to_string = "Lithkren", serialize = "LITHKREN")]
    Lithkren,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MemoirsMode {
    #[strum(to_string = "Lunch by the Lancalliums", serialize = "LUNCH_BY_THE_LANCALLIUMS")]
    Hosidius,
    #[strum(to_string = "The Fisher's Flute", serialize = "THE_FISHERS_FLUTE")]
    Piscarilius,
    #[strum(to_string = "History and Hearsay", serialize = "HISTORY_AND_HEARSAY")]
    Shayzien,
    #[strum(to_string = "Jewellery of Jubilation", serialize = "JEWELLERY_OF_JUBILATION")]
    Lovakengj,
    #[strum(to_string = "A Dark Disposition", serialize = "A_DARK_DISPOSITION")]
    Arceuus,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DesertAmuletMode {
    #[strum(to_string = "Nardah", serialize = "NARDAH")]
    Nardah,
    #[strum(to_string = "Kalphite Cave", serialize = "KALPHITE_CAVE")]
    KalphiteCave,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum KaramGloveMode {
    #[strum(to_string = "Gem Mine", serialize = "GEM_MINE")]
    GemMine,
    #[strum(to_string = "Duradel", serialize = "DURADEL")]
    Duradel,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FishingCapeMode {
    #[strum(to_string = "Fishing Guild", serialize = "FISHING_GUILD")]
    FishingGuild,
    #[strum(to_string = "Otto's Grotto", serialize = "OTTOS_GROTTO")]
    OttosGrotto,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum BlessingMode {
    #[strum(to_string = "Kourend Woodland", serialize = "KOUREND_WOODLAND")]
    KourendWoodland,
    #[strum(to_string = "Mount Karuulm", serialize = "MOUNT_KARUULM")]
    MountKaruulm,
    #[default]
    #[strum(to_string = "Off", serialize = "OFF")]
    Off,
}

teleport_modes!(
    ArdyCloakMode,
    MoryLegsMode,
    DuelRingMode,
    MaxCapeMode,
    GloryMode,
    XericsTalismanMode,
    GamesNecklaceMode,
    DigsiteMode,
    MemoirsMode,
    DesertAmuletMode,
    KaramGloveMode,
    FishingCapeMode,
    BlessingMode,
);
