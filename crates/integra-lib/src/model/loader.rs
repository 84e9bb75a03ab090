use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// A runtime a file can target, or the `Any` sentinel
///
/// Each loader carries the date it first became available. Publication-date
/// inference compares against these when a platform gives no loader signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loader {
    /// Matches every loader; creation date is the game's own launch
    Any,

    // Mod loaders
    Forge,
    Cauldron,
    LiteLoader,
    Fabric,
    Quilt,
    NeoForge,

    // Plugin loaders
    Bukkit,
    Spigot,
    Paper,
    Purpur,
    Velocity,
    Folia,
    Waterfall,
    Sponge,
    BungeeCord,

    // Shader loaders
    Vanilla,
    Iris,
    OptiFine,
    Canvas,
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

impl Loader {
    /// The date this loader technology first existed
    pub fn created(self) -> DateTime<Utc> {
        match self {
            Loader::Any | Loader::Vanilla => date(2009, 5, 17),

            Loader::Forge => date(2011, 2, 19),
            Loader::Cauldron => date(2014, 2, 1),
            Loader::LiteLoader => date(2012, 8, 9),
            Loader::Fabric => date(2018, 12, 10),
            Loader::Quilt => date(2021, 3, 20),
            Loader::NeoForge => date(2023, 6, 6),

            Loader::Bukkit => date(2011, 1, 6),
            Loader::Spigot => date(2012, 10, 22),
            Loader::Paper => date(2015, 9, 21),
            Loader::Purpur => date(2020, 2, 13),
            Loader::Velocity => date(2019, 6, 9),
            Loader::Folia => date(2022, 12, 23),
            Loader::Waterfall => date(2016, 6, 26),
            Loader::Sponge => date(2014, 9, 7),
            Loader::BungeeCord => date(2012, 5, 26),

            Loader::Iris => date(2021, 7, 1),
            Loader::OptiFine => date(2011, 4, 8),
            Loader::Canvas => date(2011, 4, 8),
        }
    }

    /// Parse a platform loader tag
    ///
    /// `datapack` and `minecraft` are loader slots some platforms fill with
    /// non-loader tags; both collapse to [`Loader::Any`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        let l = match tag.to_ascii_lowercase().as_str() {
            "any" | "datapack" | "minecraft" => Loader::Any,
            "forge" => Loader::Forge,
            "cauldron" => Loader::Cauldron,
            "liteloader" => Loader::LiteLoader,
            "fabric" => Loader::Fabric,
            "quilt" => Loader::Quilt,
            "neoforge" => Loader::NeoForge,
            "bukkit" => Loader::Bukkit,
            "spigot" => Loader::Spigot,
            "paper" => Loader::Paper,
            "purpur" => Loader::Purpur,
            "velocity" => Loader::Velocity,
            "folia" => Loader::Folia,
            "waterfall" => Loader::Waterfall,
            "sponge" => Loader::Sponge,
            "bungeecord" => Loader::BungeeCord,
            "vanilla" => Loader::Vanilla,
            "iris" => Loader::Iris,
            "optifine" => Loader::OptiFine,
            "canvas" => Loader::Canvas,
            _ => return None,
        };
        Some(l)
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Loader::Any => "any",
            Loader::Forge => "forge",
            Loader::Cauldron => "cauldron",
            Loader::LiteLoader => "liteloader",
            Loader::Fabric => "fabric",
            Loader::Quilt => "quilt",
            Loader::NeoForge => "neoforge",
            Loader::Bukkit => "bukkit",
            Loader::Spigot => "spigot",
            Loader::Paper => "paper",
            Loader::Purpur => "purpur",
            Loader::Velocity => "velocity",
            Loader::Folia => "folia",
            Loader::Waterfall => "waterfall",
            Loader::Sponge => "sponge",
            Loader::BungeeCord => "bungeecord",
            Loader::Vanilla => "vanilla",
            Loader::Iris => "iris",
            Loader::OptiFine => "optifine",
            Loader::Canvas => "canvas",
        };
        f.write_str(name)
    }
}
