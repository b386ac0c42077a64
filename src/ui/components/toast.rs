use crate::customers::{Notifier, Severity, Toast};
use dioxus::prelude::*;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Queue of toasts currently on screen
#[derive(Clone, Copy, PartialEq)]
pub struct ToastContext {
    toasts: Signal<Vec<ToastEntry>>,
    next_id: Signal<u64>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn entries(&self) -> Vec<ToastEntry> {
        self.toasts.read().clone()
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|entry| entry.id != id);
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: Toast) {
        let mut next_id = self.next_id;
        let id = *next_id.read();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(ToastEntry { id, toast });
    }
}

/// Hook to access the toast queue
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>()
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toast-stack",
            for entry in toasts.entries() {
                ToastItem { key: "{entry.id}", entry: entry.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(entry: ToastEntry) -> Element {
    let toasts = use_toasts();
    let id = entry.id;

    use_future(move || async move {
        tokio::time::sleep(TOAST_DURATION).await;
        toasts.dismiss(id);
    });

    let class = match entry.toast.severity {
        Severity::Default => "toast",
        Severity::Destructive => "toast toast-destructive",
    };

    rsx! {
        div { class,
            div { class: "toast-body",
                p { class: "toast-title", "{entry.toast.title}" }
                p { class: "toast-description", "{entry.toast.description}" }
            }
            button {
                class: "toast-close",
                onclick: move |_| toasts.dismiss(id),
                "✕"
            }
        }
    }
}
