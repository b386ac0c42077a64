use crate::customers::presentation::delete_prompt;
use crate::customers::DeleteTarget;
use dioxus::prelude::*;

#[component]
pub fn DeleteCustomerDialog(
    target: DeleteTarget,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let message = delete_prompt(&target.customer_name);

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "dialog-title", "تأكيد الحذف" }
                p { class: "dialog-message", "{message}" }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-muted",
                        onclick: move |_| on_cancel.call(()),
                        "إلغاء"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "حذف"
                    }
                }
            }
        }
    }
}
