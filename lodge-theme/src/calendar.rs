//! Twelve-month view of the seasonal themes.
use serde::Serialize;

use crate::month::Month;
use crate::season::{SeasonTag, SeasonalTheme, SeasonalThemeResolver};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub month: Month,
    pub theme: SeasonalTheme,
}

/// Resolved theme for every month of the year, January first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonCalendar {
    entries: Vec<CalendarEntry>,
}

impl SeasonCalendar {
    #[must_use]
    pub fn with_resolver(resolver: &SeasonalThemeResolver) -> Self {
        let entries = Month::all()
            .map(|month| CalendarEntry {
                month,
                theme: resolver.resolve(month),
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    #[must_use]
    pub fn operating_months(&self) -> Vec<Month> {
        self.entries
            .iter()
            .filter(|entry| entry.theme.name.is_operating())
            .map(|entry| entry.month)
            .collect()
    }

    /// First month after `from` whose season differs, wrapping into the next year.
    #[must_use]
    pub fn next_change(&self, from: Month) -> Option<(Month, SeasonTag)> {
        let start = self.entries.iter().position(|entry| entry.month == from)?;
        let current = self.entries[start].theme.name;
        self.entries
            .iter()
            .cycle()
            .skip(start + 1)
            .take(self.entries.len() - 1)
            .find(|entry| entry.theme.name != current)
            .map(|entry| (entry.month, entry.theme.name))
    }
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self::with_resolver(&SeasonalThemeResolver::default())
    }
}
