mod customer_row;
mod customer_table;
mod delete_customer_dialog;
mod loading;
mod status_badge;
mod toast;

pub use customer_table::CustomerTable;
pub use status_badge::StatusBadge;
pub use toast::{use_toasts, ToastContext, ToastEntry, ToastHost};
