use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Login, People};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/people")]
    People {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::APP_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` based on session state.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if session().is_signed_in() {
        nav.replace(Route::People {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
