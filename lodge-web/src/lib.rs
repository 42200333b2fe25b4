#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod clock;
pub mod components;
pub mod dom;
pub mod pages;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let theme = lodge_theme::seasonal_theme(clock::current_month());
    crate::dom::apply_season(&theme);
    yew::Renderer::<app::App>::new().render();
}
