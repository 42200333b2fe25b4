use yew::prelude::*;

use crate::components::footer::Footer;
use crate::pages::home::HomePage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <HomePage />
            <Footer />
        </>
    }
}
