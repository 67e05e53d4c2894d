use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center gap-4 p-8 min-h-screen text-center",
            h1 { class: "text-2xl font-bold", "Page not found" }
            p { class: "text-gray-400", "Nothing lives at /{path}" }
            Link {
                to: Route::Home {},
                class: "text-blue-400 hover:underline",
                "Back to the cloner"
            }
        }
    }
}
