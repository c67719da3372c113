use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod captcha;
mod config;
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod header;
    pub mod nav_state;
    pub mod scroll_spy;
    pub mod site_nav;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use components::header::Header;
use pages::{landing::Landing, privacy::Privacy};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            // The header lives outside the route switch so the relocating nav
            // keeps its DOM across navigation.
            <Header />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
