use super::Loader;
use std::fmt;

/// A concrete (loader, game version) compatibility pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameVersion {
    pub loader: Loader,
    pub version: String,
}

impl GameVersion {
    pub fn new(loader: Loader, version: impl Into<String>) -> Self {
        Self {
            loader,
            version: version.into(),
        }
    }

    /// A version string with any letter in it is a snapshot or dev build
    pub fn is_snapshot(&self) -> bool {
        self.version.chars().any(|c| c.is_alphabetic())
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.loader, self.version.to_lowercase())
    }
}
