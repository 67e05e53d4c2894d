use dioxus::prelude::*;

use crate::components::CloneForm;
use crate::context::AppContext;

#[component]
pub fn Home() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        CloneForm {}

        p {
            class: "text-center text-xs text-gray-500 pb-4",
            "Backend: {ctx.config.endpoint}"
        }
    }
}
