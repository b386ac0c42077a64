use crate::customers::presentation::{empty_message, total_label, COLUMN_HEADERS, SEARCH_PLACEHOLDER, TITLE};
use crate::customers::{use_customer_service, CustomerList, CustomerService, DeleteConfirmation, DeleteTarget};
use crate::db::Customer;
use dioxus::prelude::*;
use tracing::debug;

use super::customer_row::CustomerTableRow;
use super::delete_customer_dialog::DeleteCustomerDialog;
use super::loading::CustomersLoading;
use super::toast::{use_toasts, ToastContext};

/// Fetch the full table and swap it into `list`
async fn refresh(service: CustomerService, toasts: ToastContext, mut list: Signal<CustomerList>) {
    let fetched = service.fetch_customers(&toasts).await;
    list.write().finish_fetch(fetched);
}

/// Customer management table
///
/// Adding, bulk adding, bulk editing and editing are handled by the host;
/// the table only reports the request.
#[component]
pub fn CustomerTable(
    on_add_customer: EventHandler<()>,
    on_add_bulk_customers: EventHandler<()>,
    on_bulk_edit: EventHandler<()>,
    on_edit_customer: EventHandler<Customer>,
) -> Element {
    debug!("Component rendering");
    let service = use_customer_service();
    let toasts = use_toasts();
    let list = use_signal(CustomerList::new);
    let mut search_term = use_signal(String::new);
    let mut confirmation = use_signal(DeleteConfirmation::default);

    // Load customers on component mount
    use_effect({
        let service = service.clone();
        move || {
            let service = service.clone();
            spawn(async move {
                refresh(service, toasts, list).await;
            });
        }
    });

    let on_delete_confirmed = {
        let service = service.clone();
        move |_: ()| {
            let Some(target) = confirmation.write().confirm() else {
                return;
            };
            let service = service.clone();
            spawn(async move {
                if service.delete_customer(target.id, &toasts).await {
                    refresh(service, toasts, list).await;
                }
            });
        }
    };

    if list.read().is_loading() {
        return rsx! {
            CustomersLoading {}
        };
    }

    let term = search_term();
    let visible = list.read().visible(&term);
    let total = total_label(list.read().len());
    let empty = empty_message(&term);
    let columns = COLUMN_HEADERS.len();
    let pending_delete = confirmation.read().target().cloned();

    rsx! {
        div { class: "customers-card",
            div { class: "customers-header",
                h1 { class: "customers-title", {TITLE} }
                div { class: "toolbar",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_add_customer.call(()),
                        "إضافة عميل"
                    }
                    button {
                        class: "btn btn-outline btn-green",
                        onclick: move |_| on_add_bulk_customers.call(()),
                        "إضافة متعددة"
                    }
                    button {
                        class: "btn btn-outline btn-purple",
                        onclick: move |_| on_bulk_edit.call(()),
                        "تعديل جماعي"
                    }
                }
            }

            div { class: "search-row",
                input {
                    class: "search-input",
                    placeholder: SEARCH_PLACEHOLDER,
                    value: "{term}",
                    oninput: move |event| search_term.set(event.value()),
                }
                div { class: "total-count", "{total}" }
            }

            div { class: "table-frame",
                table { class: "customers-table",
                    thead {
                        tr {
                            for header in COLUMN_HEADERS {
                                th { "{header}" }
                            }
                        }
                    }
                    tbody {
                        if visible.is_empty() {
                            tr {
                                td {
                                    class: "empty-cell",
                                    colspan: "{columns}",
                                    {empty}
                                }
                            }
                        } else {
                            for customer in visible {
                                CustomerTableRow {
                                    key: "{customer.id}",
                                    customer: customer.clone(),
                                    on_edit: on_edit_customer,
                                    on_delete: move |target: DeleteTarget| confirmation.write().open(target),
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(target) = pending_delete {
            DeleteCustomerDialog {
                target,
                on_confirm: on_delete_confirmed,
                on_cancel: move |_| confirmation.write().cancel(),
            }
        }
    }
}
