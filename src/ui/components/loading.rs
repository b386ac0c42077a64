use dioxus::prelude::*;

/// Spinner shown until the first fetch finishes
#[component]
pub fn CustomersLoading() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
        }
    }
}
