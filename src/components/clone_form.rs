use dioxus::prelude::*;

use crate::components::icons::AlertTriangleIcon;
use crate::components::PreviewModal;
use crate::hooks::use_clone_session;

/// URL form that clones a page and opens the result in a preview modal
#[component]
pub fn CloneForm() -> Element {
    let widget = use_clone_session();

    let session = widget.session.read();
    let loading = session.state.is_loading();
    let error = session.state.error().map(str::to_string);
    let preview = session.state.preview_html().map(str::to_string);
    let draft = session.draft.clone();
    drop(session);

    let copied = widget.copied.read().is_visible();

    rsx! {
        div {
            class: "flex flex-col items-center gap-4 p-4 min-h-screen",

            div {
                class: "flex flex-col items-center justify-center gap-6 bg-black p-8 rounded-lg shadow-2xl border border-gray-800",

                label {
                    r#for: "url-input",
                    class: "text-lg font-medium text-white",
                    "Enter a URL to clone:"
                }

                input {
                    id: "url-input",
                    r#type: "text",
                    class: "border-2 border-gray-600 bg-gray-900 text-white rounded-md p-3 w-80 shadow-lg focus:border-gray-400 focus:outline-none transition placeholder-gray-400",
                    placeholder: "https://example.com",
                    value: "{draft}",
                    disabled: loading,
                    oninput: move |e| widget.set_draft.call(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            widget.submit.call(());
                        }
                    },
                }

                button {
                    class: "bg-blue-500 hover:bg-blue-600 disabled:bg-blue-300 text-white p-3 px-6 rounded-md transition shadow-lg font-medium",
                    disabled: loading,
                    onclick: move |_| widget.submit.call(()),
                    if loading {
                        div {
                            class: "flex items-center gap-2",
                            span {
                                class: "inline-block w-4 h-4 border-2 border-white border-t-transparent rounded-full animate-spin"
                            }
                            "Cloning..."
                        }
                    } else {
                        "Clone"
                    }
                }
            }

            if let Some(message) = error {
                div {
                    class: "flex items-center gap-2 text-red-400 text-center p-4 bg-red-900/20 border border-red-800 rounded-md shadow-lg",
                    role: "alert",
                    AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
                    "{message}"
                }
            }

            if let Some(html) = preview {
                PreviewModal {
                    html,
                    copied,
                    on_copy: move |_| widget.copy.call(()),
                    on_close: move |_| widget.close.call(()),
                }
            }
        }
    }
}
