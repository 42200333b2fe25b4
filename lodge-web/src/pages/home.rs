use lodge_theme::{Month, SeasonalThemeResolver};
use yew::prelude::*;

use crate::clock::current_month;
use crate::components::lodge_card::LodgeGrid;
use crate::components::season_hero::SeasonHero;
use crate::components::seasonal_banner::SeasonalBanner;

pub const SITE_TITLE: &str = "北アルプス 三山荘";

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    /// Month to render for; the visitor's clock when unset.
    #[prop_or_default]
    pub month: Option<Month>,
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let month = p.month.unwrap_or_else(current_month);
    let theme = SeasonalThemeResolver::new().resolve(month);
    log::debug!("rendering home page for month {month} ({})", theme.name);
    html! {
        <main id="main">
            <SeasonalBanner theme={theme.clone()} />
            <SeasonHero title={SITE_TITLE} {theme} />
            <LodgeGrid />
        </main>
    }
}
