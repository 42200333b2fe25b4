//! Lodge theme resolution
//!
//! Platform-agnostic lookup of the seasonal theme for a calendar month and of
//! the static palette for each lodge. No UI or clock dependencies unless the
//! `clock` feature is enabled.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod lodge;
pub mod month;
pub mod season;

// Re-export commonly used types
pub use calendar::{CalendarEntry, SeasonCalendar};
#[cfg(feature = "clock")]
pub use clock::SystemClock;
pub use clock::{FixedMonth, MonthSource};
pub use config::{DEFAULT_BANNER_TEXT, ResolverConfig};
pub use error::ThemeError;
pub use lodge::{LodgeId, LodgeTheme, LodgeThemeResolver, lodge_theme};
pub use month::Month;
pub use season::{
    Banner, BannerKind, SeasonTag, SeasonalTheme, SeasonalThemeResolver, seasonal_theme,
};
