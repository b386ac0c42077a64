use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::{debug, info};

use crate::db::Customer;
use crate::ui::components::{CustomerTable, ToastContext, ToastHost};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    use_context_provider(ToastContext::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app", dir: "rtl",
            CustomerTable {
                on_add_customer: move |_| info!("Add customer requested"),
                on_add_bulk_customers: move |_| info!("Bulk add requested"),
                on_bulk_edit: move |_| info!("Bulk edit requested"),
                on_edit_customer: move |customer: Customer| {
                    info!("Edit requested for customer {}", customer.id)
                },
            }
            ToastHost {}
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("إدارة العملاء")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
