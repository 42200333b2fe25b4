//! Seasonal theme selection.
//!
//! The lodges open for the summer climbing season (July) and close in
//! November. Months before opening show a preview notice, winter months show a
//! closure warning.
use serde::Serialize;
use std::fmt;

use crate::clock::MonthSource;
use crate::config::ResolverConfig;
use crate::error::ThemeError;
use crate::month::Month;

/// Label selecting a seasonal visual theme and banner copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonTag {
    Summer,
    EarlyAutumn,
    Autumn,
    LateAutumn,
    OffSeason,
    SummerPreview,
}

impl SeasonTag {
    pub const ALL: [Self; 6] = [
        Self::Summer,
        Self::EarlyAutumn,
        Self::Autumn,
        Self::LateAutumn,
        Self::OffSeason,
        Self::SummerPreview,
    ];

    /// Branch table from month to tag. Out-of-season ranges are checked first.
    #[must_use]
    pub const fn for_month(month: Month) -> Self {
        let m = month.number();
        if m >= 3 && m <= 6 {
            return Self::SummerPreview;
        }
        if m < 7 || m > 11 {
            return Self::OffSeason;
        }
        match m {
            7 | 8 => Self::Summer,
            9 => Self::EarlyAutumn,
            10 => Self::Autumn,
            _ => Self::LateAutumn,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::EarlyAutumn => "early-autumn",
            Self::Autumn => "autumn",
            Self::LateAutumn => "late-autumn",
            Self::OffSeason => "off-season",
            Self::SummerPreview => "summer-preview",
        }
    }

    /// Whether the lodges are open during this season.
    #[must_use]
    pub const fn is_operating(self) -> bool {
        matches!(
            self,
            Self::Summer | Self::EarlyAutumn | Self::Autumn | Self::LateAutumn
        )
    }

    const fn palette(self) -> SeasonPalette {
        match self {
            Self::Summer => SeasonPalette {
                primary: "#2e7d32",
                accent: "#66bb6a",
                gradient: "from-green-50 to-emerald-50",
                description: "夏山シーズン",
            },
            Self::EarlyAutumn => SeasonPalette {
                primary: "#b7791f",
                accent: "#ecc94b",
                gradient: "from-amber-50 to-yellow-50",
                description: "初秋の山歩き",
            },
            Self::Autumn => SeasonPalette {
                primary: "#d4622b",
                accent: "#f9a825",
                gradient: "from-orange-50 to-yellow-50",
                description: "錦秋の絶景",
            },
            Self::LateAutumn => SeasonPalette {
                primary: "#8d6e63",
                accent: "#bcaaa4",
                gradient: "from-stone-100 to-orange-50",
                description: "晩秋・小屋閉め間近",
            },
            Self::OffSeason => SeasonPalette {
                primary: "#525252",
                accent: "#737373",
                gradient: "from-gray-50 to-slate-100",
                description: "冬季休業中",
            },
            Self::SummerPreview => SeasonPalette {
                primary: "#1e6091",
                accent: "#52b69a",
                gradient: "from-sky-50 to-teal-50",
                description: "夏山シーズンに向けて準備中",
            },
        }
    }

    const fn banner_kind(self) -> Option<BannerKind> {
        match self {
            Self::SummerPreview | Self::LateAutumn => Some(BannerKind::Info),
            Self::OffSeason => Some(BannerKind::Warning),
            Self::Summer | Self::EarlyAutumn | Self::Autumn => None,
        }
    }
}

impl fmt::Display for SeasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct SeasonPalette {
    primary: &'static str,
    accent: &'static str,
    gradient: &'static str,
    description: &'static str,
}

/// Severity of a seasonal notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Info,
    Warning,
}

impl BannerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Optional seasonal notice attached to a [`SeasonalTheme`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Banner {
    pub show: bool,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: BannerKind,
}

/// Colors, copy and notice for one season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeasonalTheme {
    pub name: SeasonTag,
    pub primary: &'static str,
    pub accent: &'static str,
    pub gradient: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
}

/// Maps a calendar month to its [`SeasonalTheme`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeasonalThemeResolver {
    config: ResolverConfig,
}

impl SeasonalThemeResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn resolve(&self, month: Month) -> SeasonalTheme {
        let tag = SeasonTag::for_month(month);
        let palette = tag.palette();
        log::debug!("month {month} resolved to season {tag}");
        SeasonalTheme {
            name: tag,
            primary: palette.primary,
            accent: palette.accent,
            gradient: palette.gradient,
            description: palette.description,
            banner: tag.banner_kind().map(|kind| Banner {
                show: true,
                text: self.config.banner_text.clone(),
                kind,
            }),
        }
    }

    /// Resolve a raw month number.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MonthOutOfRange`] instead of guessing a theme.
    pub fn resolve_number(&self, month: u8) -> Result<SeasonalTheme, ThemeError> {
        Month::new(month).map(|m| self.resolve(m))
    }

    /// Resolve the theme for whatever month `source` reports as current.
    #[must_use]
    pub fn resolve_current<S: MonthSource + ?Sized>(&self, source: &S) -> SeasonalTheme {
        self.resolve(source.current_month())
    }
}

/// Resolve `month` with the default resolver configuration.
#[must_use]
pub fn seasonal_theme(month: Month) -> SeasonalTheme {
    SeasonalThemeResolver::new().resolve(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedMonth;
    use crate::config::DEFAULT_BANNER_TEXT;

    fn month(n: u8) -> Month {
        Month::new(n).unwrap()
    }

    #[test]
    fn peak_summer_has_no_banner() {
        for m in [7, 8] {
            let theme = seasonal_theme(month(m));
            assert_eq!(theme.name, SeasonTag::Summer);
            assert!(theme.banner.is_none());
        }
    }

    #[test]
    fn autumn_progression() {
        assert_eq!(seasonal_theme(month(9)).name, SeasonTag::EarlyAutumn);
        assert_eq!(seasonal_theme(month(10)).name, SeasonTag::Autumn);
        let late = seasonal_theme(month(11));
        assert_eq!(late.name, SeasonTag::LateAutumn);
        assert_eq!(late.banner.unwrap().kind, BannerKind::Info);
    }

    #[test]
    fn spring_months_preview_summer() {
        for m in 3..=6 {
            let theme = seasonal_theme(month(m));
            assert_eq!(theme.name, SeasonTag::SummerPreview);
            let banner = theme.banner.expect("preview banner");
            assert!(banner.show);
            assert_eq!(banner.kind, BannerKind::Info);
            assert_eq!(banner.text, DEFAULT_BANNER_TEXT);
        }
    }

    #[test]
    fn winter_months_warn_of_closure() {
        for m in [12, 1, 2] {
            let theme = seasonal_theme(month(m));
            assert_eq!(theme.name, SeasonTag::OffSeason);
            assert_eq!(theme.banner.unwrap().kind, BannerKind::Warning);
        }
    }

    #[test]
    fn october_matches_expected_record() {
        let theme = seasonal_theme(month(10));
        assert_eq!(
            theme,
            SeasonalTheme {
                name: SeasonTag::Autumn,
                primary: "#d4622b",
                accent: "#f9a825",
                gradient: "from-orange-50 to-yellow-50",
                description: "錦秋の絶景",
                banner: None,
            }
        );
    }

    #[test]
    fn january_matches_expected_record() {
        let theme = seasonal_theme(month(1));
        assert_eq!(theme.name, SeasonTag::OffSeason);
        assert_eq!(theme.primary, "#525252");
        assert_eq!(theme.accent, "#737373");
        assert_eq!(
            theme.banner,
            Some(Banner {
                show: true,
                text: "ここは最新情報を記載します".to_string(),
                kind: BannerKind::Warning,
            })
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = SeasonalThemeResolver::new();
        for m in Month::all() {
            assert_eq!(resolver.resolve(m), resolver.resolve(m));
        }
    }

    #[test]
    fn out_of_range_numbers_fail_fast() {
        let resolver = SeasonalThemeResolver::new();
        assert_eq!(
            resolver.resolve_number(0),
            Err(ThemeError::MonthOutOfRange(0))
        );
        assert_eq!(
            resolver.resolve_number(13),
            Err(ThemeError::MonthOutOfRange(13))
        );
        assert_eq!(resolver.resolve_number(8).unwrap().name, SeasonTag::Summer);
    }

    #[test]
    fn configured_banner_text_flows_into_theme() {
        let config = ResolverConfig::default()
            .with_banner_text("今季の営業は終了しました")
            .unwrap();
        let resolver = SeasonalThemeResolver::with_config(config);
        let banner = resolver.resolve(month(12)).banner.unwrap();
        assert_eq!(banner.text, "今季の営業は終了しました");
    }

    #[test]
    fn resolve_current_reads_injected_month() {
        let resolver = SeasonalThemeResolver::new();
        let theme = resolver.resolve_current(&FixedMonth(month(9)));
        assert_eq!(theme.name, SeasonTag::EarlyAutumn);
    }

    #[test]
    fn operating_flag_tracks_open_months() {
        let open: Vec<u8> = Month::all()
            .filter(|m| SeasonTag::for_month(*m).is_operating())
            .map(Month::number)
            .collect();
        assert_eq!(open, vec![7, 8, 9, 10, 11]);
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(seasonal_theme(month(4))).unwrap();
        assert_eq!(json["name"], "summer-preview");
        assert_eq!(json["banner"]["type"], "info");
        assert_eq!(json["banner"]["show"], true);

        let json = serde_json::to_value(seasonal_theme(month(8))).unwrap();
        assert_eq!(json["name"], "summer");
        assert!(json.get("banner").is_none());
    }

    #[test]
    fn every_tag_has_distinct_primary() {
        let mut primaries: Vec<_> = SeasonTag::ALL.iter().map(|t| t.palette().primary).collect();
        primaries.sort_unstable();
        primaries.dedup();
        assert_eq!(primaries.len(), SeasonTag::ALL.len());
    }
}
