use thiserror::Error;

/// Errors raised when a caller hands the resolvers input outside their closed domains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown lodge identifier `{0}` (expected mitsumata, suisho or yumata)")]
    InvalidLodgeIdentifier(String),
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(i64),
    #[error("`{0}` is not a month number")]
    InvalidMonth(String),
    #[error("invalid resolver config: {0}")]
    Config(String),
}
