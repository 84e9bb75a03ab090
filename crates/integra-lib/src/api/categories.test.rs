use super::*;

#[test]
fn modrinth_slugs_map_in_type_context() {
    assert_eq!(
        map_modrinth(IntegrationType::Mod, "optimization"),
        Some(Category::Mod(ModCategory::Performance))
    );
    assert_eq!(
        map_modrinth(IntegrationType::Modpack, "optimization"),
        Some(Category::Modpack(ModpackCategory::VanillaPlus))
    );
    assert_eq!(map_modrinth(IntegrationType::Mod, "no-such-slug"), None);
    // Types without a Modrinth vocabulary map nothing
    assert_eq!(map_modrinth(IntegrationType::World, "adventure"), None);
}

#[test]
fn cursed_tags_share_one_sentinel() {
    assert_eq!(
        map_modrinth(IntegrationType::Mod, "cursed"),
        Some(Category::Cursed)
    );
    assert_eq!(
        map_modrinth(IntegrationType::Resourcepack, "cursed"),
        Some(Category::Cursed)
    );
    assert_eq!(
        map_modrinth(IntegrationType::Shader, "cartoon"),
        Some(Category::Cursed)
    );
}

#[test]
fn curseforge_pairs_map_per_class() {
    assert_eq!(
        map_curseforge(6, 419),
        Some(Category::Mod(ModCategory::Magic))
    );
    assert_eq!(
        map_curseforge(5, 115),
        Some(Category::Plugin(PluginCategory::AdminTools))
    );
    assert_eq!(
        map_curseforge(6552, 6553),
        Some(Category::Shader(ShaderCategory::Realistic))
    );
    // Category id valid in another class does not leak across classes
    assert_eq!(map_curseforge(17, 419), None);
    assert_eq!(map_curseforge(12345, 1), None);
}

#[test]
fn spiget_numeric_categories_collapse_to_plugin_families() {
    assert_eq!(
        map_spiget(18),
        Some(Category::Plugin(PluginCategory::WorldEditingAndManagement))
    );
    assert_eq!(
        map_spiget(2),
        Some(Category::Plugin(PluginCategory::General))
    );
    assert_eq!(
        map_spiget(26),
        Some(Category::Plugin(PluginCategory::DeveloperTools))
    );
    assert_eq!(map_spiget(9999), None);
}
