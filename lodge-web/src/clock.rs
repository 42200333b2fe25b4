//! Month the visitor is browsing in.
use lodge_theme::{Month, MonthSource};

/// Reads the month from the browser's `Date` on wasm, the host clock elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl MonthSource for BrowserClock {
    #[cfg(target_arch = "wasm32")]
    fn current_month(&self) -> Month {
        // getMonth() is zero-based
        let zero_based = js_sys::Date::new_0().get_month();
        Month::try_from(zero_based + 1).unwrap_or_else(|err| {
            log::error!("browser clock returned an invalid month: {err}");
            Month::JANUARY
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn current_month(&self) -> Month {
        lodge_theme::SystemClock.current_month()
    }
}

#[must_use]
pub fn current_month() -> Month {
    BrowserClock.current_month()
}
