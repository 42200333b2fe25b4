use lodge_theme::SeasonalTheme;
use yew::prelude::*;

use super::class_list;
use crate::dom::season_style;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub theme: SeasonalTheme,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SeasonHero)]
pub fn season_hero(p: &Props) -> Html {
    let mut classes = class_list(&["hero", "bg-gradient-to-b", "p-6"], &p.class);
    for class in p.theme.gradient.split_whitespace() {
        classes.push(class);
    }
    html! {
        <section class={classes} style={season_style(&p.theme)} data-season={p.theme.name.as_str()} aria-label="Hero">
            <div class="hero-content flex-col gap-6">
                <h1 class="text-3xl font-bold">{ p.title.clone() }</h1>
                <p class="season-description">{ p.theme.description }</p>
                { for p.children.iter() }
            </div>
        </section>
    }
}
