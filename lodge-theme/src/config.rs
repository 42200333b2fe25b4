//! Resolver configuration.
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Notice shown on every seasonal banner until the site publishes real news.
pub const DEFAULT_BANNER_TEXT: &str = "ここは最新情報を記載します";

fn default_banner_text() -> String {
    DEFAULT_BANNER_TEXT.to_string()
}

/// Tunables for [`crate::SeasonalThemeResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_banner_text")]
    pub banner_text: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            banner_text: default_banner_text(),
        }
    }

    /// Load resolver configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if the JSON cannot be parsed or validation fails.
    pub fn from_json(json_str: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(json_str)
            .map_err(|e| ThemeError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        if self.banner_text.trim().is_empty() {
            return Err(ThemeError::Config("banner_text must not be blank".into()));
        }
        Ok(())
    }

    /// Replace the banner text, keeping the rest of the config.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] when the text is blank.
    pub fn with_banner_text(mut self, text: impl Into<String>) -> Result<Self, ThemeError> {
        self.banner_text = text.into();
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_falls_back_to_defaults() {
        let config = ResolverConfig::from_json("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.banner_text, DEFAULT_BANNER_TEXT);
    }

    #[test]
    fn custom_banner_text_is_kept() {
        let config = ResolverConfig::from_json(r#"{"banner_text":"営業再開しました"}"#).unwrap();
        assert_eq!(config.banner_text, "営業再開しました");
    }

    #[test]
    fn blank_text_and_bad_json_are_rejected() {
        assert!(matches!(
            ResolverConfig::from_json(r#"{"banner_text":"  "}"#),
            Err(ThemeError::Config(_))
        ));
        assert!(matches!(
            ResolverConfig::from_json("not json"),
            Err(ThemeError::Config(msg)) if msg.starts_with("JSON parse error")
        ));
        assert!(ResolverConfig::default().with_banner_text("").is_err());
    }
}
