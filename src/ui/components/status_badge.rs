use crate::customers::presentation::BadgeVariant;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(label: String, variant: BadgeVariant) -> Element {
    rsx! {
        span { class: variant.class(), "{label}" }
    }
}
