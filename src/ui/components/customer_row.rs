use crate::customers::presentation::CustomerRow;
use crate::customers::DeleteTarget;
use crate::db::Customer;
use dioxus::prelude::*;

use super::status_badge::StatusBadge;

/// One customer line of the table, with its edit and delete buttons
#[component]
pub fn CustomerTableRow(
    customer: Customer,
    on_edit: EventHandler<Customer>,
    on_delete: EventHandler<DeleteTarget>,
) -> Element {
    let row = CustomerRow::from(&customer);
    let target = DeleteTarget {
        id: customer.id,
        customer_name: customer.customer_name.clone(),
    };

    rsx! {
        tr { class: "customer-row",
            td { class: "cell-name", "{row.name}" }
            td { "{row.mobile_number}" }
            td { "{row.line_type}" }
            td { "{row.charging_date}" }
            td {
                StatusBadge { label: row.payment_status.clone(), variant: row.payment_badge }
            }
            td { "{row.monthly_price}" }
            td {
                StatusBadge { label: row.renewal_status.clone(), variant: row.renewal_badge }
            }
            td { "{row.provider}" }
            td {
                div { class: "row-actions",
                    button {
                        class: "btn btn-outline btn-edit",
                        title: "تعديل",
                        onclick: move |_| on_edit.call(customer.clone()),
                        "✎"
                    }
                    button {
                        class: "btn btn-outline btn-delete",
                        title: "حذف",
                        onclick: move |_| on_delete.call(target.clone()),
                        "🗑"
                    }
                }
            }
        }
    }
}
