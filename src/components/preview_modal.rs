use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, CopyIcon, XIcon};

/// Sandbox flags for the preview frame: scripts may run and keep their origin,
/// but the frame cannot navigate the top window or open popups.
pub const PREVIEW_SANDBOX: &str = "allow-same-origin allow-scripts";

/// Full-screen modal showing cloned HTML in a sandboxed frame
#[component]
pub fn PreviewModal(
    /// Cloned document, rendered through `srcdoc`
    html: String,
    /// Whether the "Copied!" indicator is showing
    copied: bool,
    on_copy: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/80 backdrop-blur-sm flex items-center justify-center z-50",

            div {
                class: "bg-gray-900 border border-gray-700 rounded-lg w-11/12 h-5/6 flex flex-col shadow-2xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "preview-title",

                // Header
                div {
                    class: "flex justify-between items-center p-4 border-b border-gray-700 bg-gray-800/50",
                    h2 {
                        class: "text-xl font-bold text-white",
                        id: "preview-title",
                        "Cloned Webpage Preview"
                    }
                    button {
                        class: "text-gray-400 hover:text-white hover:bg-gray-700 rounded-full w-8 h-8 flex items-center justify-center transition",
                        aria_label: "Close preview",
                        onclick: move |_| on_close.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }

                div {
                    class: "flex-1 overflow-hidden",
                    iframe {
                        class: "w-full h-full border-0 bg-white",
                        title: "Cloned webpage preview",
                        srcdoc: "{html}",
                        "sandbox": PREVIEW_SANDBOX,
                    }
                }

                // Footer actions
                div {
                    class: "p-4 border-t border-gray-700 bg-gray-800/50 flex justify-end gap-3",
                    button {
                        class: "bg-green-600 hover:bg-green-700 text-white px-4 py-2 rounded-md transition flex items-center gap-2",
                        onclick: move |_| on_copy.call(()),
                        if copied {
                            CheckIcon { class: "w-4 h-4" }
                            "Copied!"
                        } else {
                            CopyIcon { class: "w-4 h-4" }
                            "Copy HTML"
                        }
                    }
                    button {
                        class: "bg-gray-600 hover:bg-gray-700 text-white px-4 py-2 rounded-md transition",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
