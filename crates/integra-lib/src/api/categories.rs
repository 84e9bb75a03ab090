//! Static category lookup tables
//!
//! Pure data, isolated from the resolver logic. Each platform speaks its
//! own vocabulary: Modrinth tags projects with string slugs, CurseForge
//! with (class id, category id) pairs, Spiget with a flat numeric plugin
//! category. Unrecognized codes map to nothing rather than failing.

use crate::model::{
    AddonCategory, Category, CustomizationCategory, DatapackCategory, IntegrationType,
    ModCategory, ModpackCategory, PluginCategory, ResourcepackCategory, ShaderCategory,
    WorldCategory,
};

/// Translate a Modrinth category slug in the context of the project's type
pub fn map_modrinth(kind: IntegrationType, slug: &str) -> Option<Category> {
    match kind {
        IntegrationType::Mod => {
            let c = match slug {
                "adventure" => ModCategory::Rpg,
                "game-mechanics" | "minigame" => ModCategory::Miscellaneous,
                "decoration" => ModCategory::Cosmetic,
                "economy" => ModCategory::Education,
                "equipment" => ModCategory::Equipment,
                "food" => ModCategory::Food,
                "library" => ModCategory::Library,
                "magic" => ModCategory::Magic,
                "management" | "utility" => ModCategory::Utilities,
                "mobs" => ModCategory::Mobs,
                "optimization" => ModCategory::Performance,
                "social" => ModCategory::Information,
                "storage" => ModCategory::Storage,
                "technology" => ModCategory::Technology,
                "transportation" => ModCategory::Transportation,
                "worldgen" => ModCategory::WorldGen,
                "cursed" => return Some(Category::Cursed),
                _ => return None,
            };
            Some(Category::Mod(c))
        }

        IntegrationType::Resourcepack => {
            let c = match slug {
                "128x" => ResourcepackCategory::Res128x,
                "256x" => ResourcepackCategory::Res256x,
                "512x+" => ResourcepackCategory::Res512x,
                "16x" => ResourcepackCategory::Res16x,
                "32x" => ResourcepackCategory::Res32x,
                "64x" => ResourcepackCategory::Res64x,
                "8x-" => ResourcepackCategory::Res8x,
                "48x" => ResourcepackCategory::Res48x,
                "animated" => ResourcepackCategory::Animated,
                "traditional" | "audio" | "blocks" | "combat" | "core-shaders" | "decoration"
                | "entities" | "environment" | "equipment" | "gui" | "items" | "locale"
                | "models" => ResourcepackCategory::Traditional,
                "realistic" => ResourcepackCategory::Realistic,
                "simplistic" => ResourcepackCategory::Simplistic,
                "themed" => ResourcepackCategory::Themed,
                "miscellaneous" | "tweaks" | "utility" => ResourcepackCategory::Miscellaneous,
                "fonts" => ResourcepackCategory::FontPacks,
                "modded" => ResourcepackCategory::ModSupport,
                "vanilla-like" => ResourcepackCategory::Vanilla,
                "cursed" => return Some(Category::Cursed),
                _ => return None,
            };
            Some(Category::Resourcepack(c))
        }

        IntegrationType::Shader => {
            let c = match slug {
                "realistic" | "atmosphere" => ShaderCategory::Realistic,
                "fantasy" => ShaderCategory::Fantasy,
                "shadows" => ShaderCategory::Shadows,
                "screenshot" | "potato" => ShaderCategory::Performance,
                "vanilla-like" => ShaderCategory::Vanilla,
                "reflections" | "pbr" | "path-tracing" | "foliage" | "colored-lighting"
                | "bloom" => ShaderCategory::Feature,
                "medium" => ShaderCategory::Medium,
                "low" => ShaderCategory::Low,
                "semi_realistic" => ShaderCategory::SemiRealistic,
                "high" => ShaderCategory::High,
                "cursed" | "cartoon" => return Some(Category::Cursed),
                _ => return None,
            };
            Some(Category::Shader(c))
        }

        IntegrationType::Modpack => {
            let c = match slug {
                "adventure" => ModpackCategory::Rpg,
                "challenging" => ModpackCategory::Hardcore,
                "combat" => ModpackCategory::Combat,
                "kitchen-sink" => return Some(Category::Mod(ModCategory::Miscellaneous)),
                "lightweight" => ModpackCategory::Small,
                "magic" => ModpackCategory::Magic,
                "multiplayer" => ModpackCategory::Multiplayer,
                "optimization" => ModpackCategory::VanillaPlus,
                "quests" => ModpackCategory::Quests,
                "technology" => ModpackCategory::Tech,
                _ => return None,
            };
            Some(Category::Modpack(c))
        }

        _ => None,
    }
}

/// Translate a CurseForge (class id, category id) pair
pub fn map_curseforge(class_id: i64, category_id: i64) -> Option<Category> {
    match class_id {
        5 => {
            let c = match category_id {
                124 => PluginCategory::WorldEditingAndManagement,
                128 => PluginCategory::Informational,
                115 => PluginCategory::AdminTools,
                133 => PluginCategory::Miscellaneous,
                132 => PluginCategory::RolePlaying,
                116 => PluginCategory::AntiGriefingTools,
                122 => PluginCategory::DeveloperTools,
                127 => PluginCategory::General,
                125 => PluginCategory::Fixes,
                129 => PluginCategory::Mechanics,
                131 => PluginCategory::WorldGenerators,
                130 => PluginCategory::WebsiteAdministration,
                134 => PluginCategory::Transportation,
                126 => PluginCategory::Fun,
                117 => PluginCategory::ChatRelated,
                123 => PluginCategory::Economy,
                4672 => PluginCategory::TwitchIntegration,
                _ => return None,
            };
            Some(Category::Plugin(c))
        }

        6 => {
            let c = match category_id {
                436 => ModCategory::Food,
                408 => ModCategory::Ores,
                425 => ModCategory::Miscellaneous,
                424 => ModCategory::Cosmetic,
                5299 => ModCategory::Education,
                413 => ModCategory::Processing,
                423 => ModCategory::Information,
                416 => ModCategory::Farming,
                412 => ModCategory::Technology,
                418 => ModCategory::Genetics,
                409 => ModCategory::Structures,
                411 => ModCategory::Mobs,
                419 => ModCategory::Magic,
                426 | 427 | 432 | 428 | 429 | 4545 | 433 | 4485 | 430 | 4773 | 5314 | 5232
                | 6145 | 6484 | 6954 | 7669 | 9049 => ModCategory::Addons,
                410 => ModCategory::Dimensions,
                434 => ModCategory::Equipment,
                406 => ModCategory::WorldGen,
                435 => ModCategory::Utilities,
                414 => ModCategory::Transportation,
                417 => ModCategory::Energy,
                407 => ModCategory::Biomes,
                422 => ModCategory::Rpg,
                421 => ModCategory::Library,
                420 => ModCategory::Storage,
                4558 => ModCategory::Redstone,
                4843 => ModCategory::Automation,
                4671 => ModCategory::TwitchIntegration,
                4906 => ModCategory::McCreator,
                6814 => ModCategory::Performance,
                6821 => ModCategory::BugFixes,
                9026 => ModCategory::Creative,
                _ => return None,
            };
            Some(Category::Mod(c))
        }

        12 => {
            let c = match category_id {
                400 => ResourcepackCategory::Realistic,
                399 => ResourcepackCategory::Steampunk,
                403 => ResourcepackCategory::Traditional,
                398 => ResourcepackCategory::Res512x,
                396 => ResourcepackCategory::Res128x,
                397 => ResourcepackCategory::Res256x,
                402 => ResourcepackCategory::Medieval,
                395 => ResourcepackCategory::Res64x,
                405 => ResourcepackCategory::Miscellaneous,
                394 => ResourcepackCategory::Res32x,
                393 => ResourcepackCategory::Res16x,
                404 => ResourcepackCategory::Animated,
                401 => ResourcepackCategory::Modern,
                4465 => ResourcepackCategory::ModSupport,
                5193 => ResourcepackCategory::DataPacks,
                5244 => ResourcepackCategory::FontPacks,
                _ => return None,
            };
            Some(Category::Resourcepack(c))
        }

        17 => {
            let c = match category_id {
                251 => WorldCategory::Parkour,
                253 => WorldCategory::Survival,
                249 => WorldCategory::Creation,
                250 => WorldCategory::GameMap,
                248 => WorldCategory::Adventure,
                4464 => WorldCategory::ModdedWorld,
                252 => WorldCategory::Puzzle,
                _ => return None,
            };
            Some(Category::World(c))
        }

        4471 => {
            let c = match category_id {
                4475 => ModpackCategory::Rpg,
                4487 => ModpackCategory::Ftb,
                4478 => ModpackCategory::Quests,
                4481 => ModpackCategory::Small,
                4483 => ModpackCategory::Combat,
                4472 => ModpackCategory::Tech,
                4474 => ModpackCategory::SciFi,
                4479 => ModpackCategory::Hardcore,
                4484 => ModpackCategory::Multiplayer,
                4477 => ModpackCategory::MiniGame,
                4482 => ModpackCategory::ExtraLarge,
                4473 => ModpackCategory::Magic,
                4736 => ModpackCategory::Skyblock,
                4480 => ModpackCategory::MapBased,
                4476 => ModpackCategory::Exploration,
                5128 => ModpackCategory::VanillaPlus,
                4471 => ModpackCategory::Horror,
                _ => return None,
            };
            Some(Category::Modpack(c))
        }

        4546 => {
            let c = match category_id {
                4551 => CustomizationCategory::HardcoreQuestingMode,
                4549 => CustomizationCategory::Guidebook,
                4554 => CustomizationCategory::Recipes,
                4556 => CustomizationCategory::Progression,
                4550 => CustomizationCategory::Quests,
                4752 => CustomizationCategory::BuildingGadgets,
                4548 => CustomizationCategory::LuckyBlocks,
                4547 => CustomizationCategory::Configuration,
                4555 => CustomizationCategory::WorldGen,
                4552 => CustomizationCategory::Scripts,
                5186 => CustomizationCategory::FancyMenu,
                _ => return None,
            };
            Some(Category::Customization(c))
        }

        4559 => {
            let c = match category_id {
                4561 => AddonCategory::ResourcePacks,
                4562 => AddonCategory::Scenarios,
                4560 => AddonCategory::Worlds,
                _ => return None,
            };
            Some(Category::Addon(c))
        }

        6945 => {
            let c = match category_id {
                6952 => DatapackCategory::Magic,
                6945 => DatapackCategory::Miscellaneous,
                6554 => DatapackCategory::Fantasy,
                4465 => DatapackCategory::ModSupport,
                412 => DatapackCategory::Tech,
                421 => DatapackCategory::Library,
                5191 => DatapackCategory::Utility,
                422 => DatapackCategory::Adventure,
                _ => return None,
            };
            Some(Category::Datapack(c))
        }

        6552 => {
            let c = match category_id {
                6555 => ShaderCategory::Vanilla,
                6554 => ShaderCategory::Fantasy,
                6553 => ShaderCategory::Realistic,
                _ => return None,
            };
            Some(Category::Shader(c))
        }

        _ => None,
    }
}

/// Translate a Spiget numeric plugin category
pub fn map_spiget(category_id: i64) -> Option<Category> {
    let c = match category_id {
        21 | 19 | 28 | 2 | 3 | 4 | 20 => PluginCategory::General,
        9 | 26 | 25 | 15 | 12 | 7 => PluginCategory::DeveloperTools,
        6 | 11 | 14 => PluginCategory::ChatRelated,
        16 | 13 | 8 => PluginCategory::Miscellaneous,
        5 | 10 => PluginCategory::Transportation,
        18 => PluginCategory::WorldEditingAndManagement,
        27 => PluginCategory::WebsiteAdministration,
        29 => PluginCategory::WorldGenerators,
        24 => PluginCategory::RolePlaying,
        22 => PluginCategory::Mechanics,
        23 => PluginCategory::Economy,
        17 => PluginCategory::Fun,
        _ => return None,
    };
    Some(Category::Plugin(c))
}

#[cfg(test)]
mod tests {
    include!("categories.test.rs");
}
