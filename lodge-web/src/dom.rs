use lodge_theme::{LodgeTheme, SeasonalTheme};

/// CSS custom properties carrying a season's palette.
#[must_use]
pub const fn season_properties(theme: &SeasonalTheme) -> [(&'static str, &'static str); 2] {
    [
        ("--season-primary", theme.primary),
        ("--season-accent", theme.accent),
    ]
}

/// [`season_properties`] as an inline style string.
#[must_use]
pub fn season_style(theme: &SeasonalTheme) -> String {
    season_properties(theme)
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline CSS custom properties carrying a lodge's palette.
#[must_use]
pub fn lodge_style(theme: &LodgeTheme) -> String {
    format!(
        "--lodge-primary: {}; --lodge-light: {}; --lodge-dark: {}; --lodge-bg: {};",
        theme.primary, theme.light, theme.dark, theme.bg
    )
}

/// Mirror the active season onto `<html data-season>` so page CSS can key off it.
#[cfg(target_arch = "wasm32")]
pub fn apply_season(theme: &SeasonalTheme) {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        use wasm_bindgen::JsCast;

        if let Err(err) = root.set_attribute("data-season", theme.name.as_str()) {
            web_sys::console::error_1(&err);
        }
        let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        // set_property leaves unrelated inline styles on <html> intact
        let style = root.style();
        for (name, value) in season_properties(theme) {
            if let Err(err) = style.set_property(name, value) {
                web_sys::console::error_1(&err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodge_theme::{LodgeId, Month, lodge_theme, seasonal_theme};

    #[test]
    fn season_style_exposes_primary_and_accent() {
        let style = season_style(&seasonal_theme(Month::new(10).unwrap()));
        assert_eq!(style, "--season-primary: #d4622b; --season-accent: #f9a825;");
    }

    #[test]
    fn season_properties_are_custom_properties_only() {
        let props = season_properties(&seasonal_theme(Month::new(1).unwrap()));
        assert_eq!(
            props,
            [("--season-primary", "#525252"), ("--season-accent", "#737373")]
        );
        assert!(props.iter().all(|(name, _)| name.starts_with("--")));
    }

    #[test]
    fn lodge_style_exposes_full_palette() {
        let style = lodge_style(lodge_theme(LodgeId::Suisho));
        assert!(style.contains("--lodge-primary: #3a5a8c"));
        assert!(style.contains("--lodge-bg: #eef2f9"));
    }
}
