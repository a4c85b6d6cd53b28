use log::info;
use yew::prelude::*;

pub mod config;
pub mod icons;
pub mod nav;
pub mod reveal;
pub mod scroll;
mod styles;

pub mod components {
    pub mod animated_section;
    pub mod footer;
    pub mod header;
    pub mod scroll_link;
    pub mod ui;
}
mod pages {
    pub mod home;
}

use components::{footer::Footer, header::Header};
use pages::home::Home;
use styles::GlobalStyles;

#[function_component]
pub fn App() -> Html {
    html! {
        <>
            <GlobalStyles />
            <Header />
            <Home />
            <Footer />
        </>
    }
}

/// Browser entry point: panic hook, console logging, then mount [`App`].
pub fn run() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("console logging unavailable: {}", err).into());
    }

    info!("Starting {} landing page", config::BRAND);
    yew::Renderer::<App>::new().render();
}
