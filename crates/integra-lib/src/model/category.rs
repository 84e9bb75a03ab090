//! Semantic category tags, one family per integration type
//!
//! Every platform speaks its own category vocabulary; adapters translate
//! through the lookup tables in the api layer and land here. `Cursed` is a
//! single shared sentinel for the joke/cursed tag several platforms carry,
//! so no family has to enumerate it.

/// A category tag scoped to its integration-type family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mod(ModCategory),
    Plugin(PluginCategory),
    Resourcepack(ResourcepackCategory),
    Shader(ShaderCategory),
    Modpack(ModpackCategory),
    World(WorldCategory),
    Datapack(DatapackCategory),
    Customization(CustomizationCategory),
    Addon(AddonCategory),
    /// Shared sentinel for a platform's cursed/joke tag
    Cursed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModCategory {
    Food,
    Ores,
    Miscellaneous,
    Cosmetic,
    Education,
    Processing,
    Information,
    Farming,
    Technology,
    Genetics,
    Structures,
    Mobs,
    Magic,
    Addons,
    Dimensions,
    Equipment,
    WorldGen,
    Utilities,
    Transportation,
    Energy,
    Biomes,
    Rpg,
    Library,
    Storage,
    Redstone,
    Automation,
    TwitchIntegration,
    McCreator,
    Performance,
    BugFixes,
    Creative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginCategory {
    WorldEditingAndManagement,
    Informational,
    AdminTools,
    Miscellaneous,
    RolePlaying,
    AntiGriefingTools,
    DeveloperTools,
    General,
    Fixes,
    Mechanics,
    WorldGenerators,
    WebsiteAdministration,
    Fun,
    ChatRelated,
    Economy,
    TwitchIntegration,
    Transportation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourcepackCategory {
    Realistic,
    Simplistic,
    Themed,
    Steampunk,
    Traditional,
    Res512x,
    Res256x,
    Res128x,
    Res64x,
    Res48x,
    Res32x,
    Res16x,
    Res8x,
    Medieval,
    Miscellaneous,
    Animated,
    Modern,
    ModSupport,
    DataPacks,
    FontPacks,
    Vanilla,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderCategory {
    Vanilla,
    Medium,
    Low,
    High,
    SemiRealistic,
    Fantasy,
    Realistic,
    Shadows,
    Performance,
    Feature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModpackCategory {
    Rpg,
    Ftb,
    Quests,
    Small,
    Combat,
    Tech,
    SciFi,
    Hardcore,
    Multiplayer,
    MiniGame,
    ExtraLarge,
    Magic,
    Skyblock,
    MapBased,
    Exploration,
    VanillaPlus,
    Horror,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldCategory {
    Parkour,
    Survival,
    Creation,
    GameMap,
    Adventure,
    ModdedWorld,
    Puzzle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatapackCategory {
    Magic,
    Miscellaneous,
    Fantasy,
    ModSupport,
    Tech,
    Library,
    Utility,
    Adventure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomizationCategory {
    HardcoreQuestingMode,
    Guidebook,
    Recipes,
    Progression,
    Quests,
    BuildingGadgets,
    LuckyBlocks,
    Configuration,
    WorldGen,
    Scripts,
    FancyMenu,
    Skins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddonCategory {
    ResourcePacks,
    Scenarios,
    Worlds,
}
