use lodge_theme::{LodgeThemeResolver, SeasonCalendar};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let calendar = SeasonCalendar::default();
    let open = calendar.operating_months();
    let season = match (open.first(), open.last()) {
        (Some(first), Some(last)) => format!("営業期間 {first}月〜{last}月"),
        _ => String::new(),
    };
    let names = LodgeThemeResolver::all()
        .map(|(_, theme)| theme.name)
        .collect::<Vec<_>>()
        .join(" / ");
    html! {
        <footer>
            <p class="footer-lodges">{ names }</p>
            <p class="footer-season">{ season }</p>
        </footer>
    }
}
