use lodge_theme::{LodgeId, LodgeThemeResolver};
use yew::prelude::*;

use super::class_list;
use crate::dom::lodge_style;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lodge: LodgeId,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LodgeCard)]
pub fn lodge_card(p: &Props) -> Html {
    let theme = LodgeThemeResolver::resolve(p.lodge);
    let class = class_list(&["card", "lodge-card", "shadow"], &p.class);
    html! {
        <article class={class} id={format!("lodge-{}", p.lodge)} style={lodge_style(theme)} role="article">
            <header class="card-title">
                <h3>{ theme.name }</h3>
            </header>
            <div class="card-body">
                <p>{ theme.description }</p>
                { for p.children.iter() }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct GridProps {
    #[prop_or_default]
    pub class: Classes,
}

/// One card per lodge, in the group's canonical order.
#[function_component(LodgeGrid)]
pub fn lodge_grid(p: &GridProps) -> Html {
    let class = class_list(&["grid", "md:grid-cols-3", "gap-6"], &p.class);
    html! {
        <section class={class} aria-label="Lodges">
            { for LodgeId::ALL.into_iter().map(|lodge| html! { <LodgeCard key={lodge.as_str()} {lodge} /> }) }
        </section>
    }
}
