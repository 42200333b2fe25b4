use futures::executor::block_on;
use lodge_theme::{LodgeId, Month, seasonal_theme};
use lodge_web::components::footer::Footer;
use lodge_web::components::lodge_card::{LodgeCard, LodgeGrid};
use lodge_web::components::season_hero::SeasonHero;
use lodge_web::components::seasonal_banner::SeasonalBanner;
use lodge_web::pages::home::HomePage;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Classes, LocalServerRenderer};

fn month(n: u8) -> Month {
    Month::new(n).unwrap()
}

fn render_banner(n: u8) -> String {
    let props = lodge_web::components::seasonal_banner::Props {
        theme: seasonal_theme(month(n)),
        class: Classes::new(),
    };
    block_on(LocalServerRenderer::<SeasonalBanner>::with_props(props).render())
}

#[test]
fn banner_renders_warning_in_winter() {
    let html = render_banner(1);
    assert!(html.contains("alert-warning"));
    assert!(html.contains("ここは最新情報を記載します"));
}

#[test]
fn banner_renders_info_before_opening() {
    let html = render_banner(5);
    assert!(html.contains("alert-info"));
    assert!(!html.contains("alert-warning"));
}

#[test]
fn banner_is_absent_in_peak_season() {
    let html = render_banner(8);
    assert!(!html.contains("seasonal-banner"));
}

#[test]
fn hero_carries_gradient_and_description() {
    let props = lodge_web::components::season_hero::Props {
        title: AttrValue::from("Title"),
        theme: seasonal_theme(month(10)),
        class: Classes::new(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<SeasonHero>::with_props(props).render());
    assert!(html.contains("from-orange-50"));
    assert!(html.contains("錦秋の絶景"));
    assert!(html.contains("--season-primary: #d4622b"));
}

#[test]
fn lodge_card_shows_name_and_palette() {
    let props = lodge_web::components::lodge_card::Props {
        lodge: LodgeId::Yumata,
        class: Classes::new(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<LodgeCard>::with_props(props).render());
    assert!(html.contains("湯俣山荘"));
    assert!(html.contains("lodge-yumata"));
    assert!(html.contains("#8c4a2f"));
}

#[test]
fn grid_lists_all_three_lodges() {
    let html = block_on(LocalServerRenderer::<LodgeGrid>::new().render());
    for name in ["三俣山荘", "水晶小屋", "湯俣山荘"] {
        assert!(html.contains(name), "missing {name}");
    }
}

#[test]
fn home_page_uses_pinned_month() {
    let props = lodge_web::pages::home::Props {
        month: Some(month(12)),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("data-season=\"off-season\""));
    assert!(html.contains("alert-warning"));
}

#[test]
fn footer_lists_operating_window() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("7月〜11月"));
}
