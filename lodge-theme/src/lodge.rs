//! Per-lodge palettes and display names.
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// The three lodges of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LodgeId {
    Mitsumata,
    Suisho,
    Yumata,
}

impl LodgeId {
    pub const ALL: [Self; 3] = [Self::Mitsumata, Self::Suisho, Self::Yumata];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mitsumata => "mitsumata",
            Self::Suisho => "suisho",
            Self::Yumata => "yumata",
        }
    }
}

impl fmt::Display for LodgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LodgeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                log::warn!("rejected lodge identifier {token:?}");
                ThemeError::InvalidLodgeIdentifier(token.to_string())
            })
    }
}

/// Display name, palette and tagline for one lodge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LodgeTheme {
    pub id: LodgeId,
    pub name: &'static str,
    pub primary: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub bg: &'static str,
    pub description: &'static str,
}

static MITSUMATA: LodgeTheme = LodgeTheme {
    id: LodgeId::Mitsumata,
    name: "三俣山荘",
    primary: "#2f5d50",
    light: "#5f8f7f",
    dark: "#1d3b33",
    bg: "#eef5f2",
    description: "北アルプス最奥の山小屋",
};

static SUISHO: LodgeTheme = LodgeTheme {
    id: LodgeId::Suisho,
    name: "水晶小屋",
    primary: "#3a5a8c",
    light: "#6f8fbf",
    dark: "#243a5c",
    bg: "#eef2f9",
    description: "水晶岳直下、稜線の小屋",
};

static YUMATA: LodgeTheme = LodgeTheme {
    id: LodgeId::Yumata,
    name: "湯俣山荘",
    primary: "#8c4a2f",
    light: "#bf7a5f",
    dark: "#5c2f1d",
    bg: "#f9f0ec",
    description: "湯俣川沿いの温泉の宿",
};

/// Static lookup from [`LodgeId`] to its [`LodgeTheme`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LodgeThemeResolver;

impl LodgeThemeResolver {
    #[must_use]
    pub const fn resolve(id: LodgeId) -> &'static LodgeTheme {
        match id {
            LodgeId::Mitsumata => &MITSUMATA,
            LodgeId::Suisho => &SUISHO,
            LodgeId::Yumata => &YUMATA,
        }
    }

    /// Resolve an identifier supplied as text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidLodgeIdentifier`] for anything but the three known ids.
    pub fn resolve_str(id: &str) -> Result<&'static LodgeTheme, ThemeError> {
        id.parse().map(Self::resolve)
    }

    pub fn all() -> impl Iterator<Item = (LodgeId, &'static LodgeTheme)> {
        LodgeId::ALL.into_iter().map(|id| (id, Self::resolve(id)))
    }
}

#[must_use]
pub const fn lodge_theme(id: LodgeId) -> &'static LodgeTheme {
    LodgeThemeResolver::resolve(id)
}
