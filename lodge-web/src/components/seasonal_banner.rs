use lodge_theme::{BannerKind, SeasonalTheme};
use yew::prelude::*;

use super::class_list;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: SeasonalTheme,
    #[prop_or_default]
    pub class: Classes,
}

/// Seasonal notice strip. Renders nothing when the season carries no visible banner.
#[function_component(SeasonalBanner)]
pub fn seasonal_banner(p: &Props) -> Html {
    let Some(banner) = p.theme.banner.as_ref().filter(|b| b.show) else {
        return Html::default();
    };
    let mut classes = class_list(&["alert", "seasonal-banner"], &p.class);
    classes.push(match banner.kind {
        BannerKind::Info => "alert-info",
        BannerKind::Warning => "alert-warning",
    });
    let role = match banner.kind {
        BannerKind::Info => "status",
        BannerKind::Warning => "alert",
    };
    html! {
        <div class={classes} role={role} data-kind={banner.kind.as_str()}>
            <p>{ banner.text.clone() }</p>
        </div>
    }
}
