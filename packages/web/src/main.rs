use dioxus::prelude::*;

use ui::SessionProvider;
use views::{About, Blog, Contact, Home, Login, Profile, ProfileLayout, Register, SiteLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/blog")]
        Blog {},
        #[route("/contact")]
        Contact {},
        #[layout(ProfileLayout)]
            #[route("/profile")]
            Profile {},
        #[end_layout]
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
