use dioxus::prelude::*;

pub mod home;
pub mod not_found;

use home::Home;
use not_found::NotFound;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-950 text-white",
            main {
                class: "max-w-5xl mx-auto",
                Outlet::<Route> {}
            }
        }
    }
}
