mod confirm;
mod notify;
pub mod presentation;
mod search;

pub use confirm::{DeleteConfirmation, DeleteTarget};
pub use notify::{Notifier, Severity, Toast};
pub use search::{filter_customers, matches_search};

use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::config::{Backend, Config};
use crate::db::{Customer, CustomerStore, MemoryStore, SupabaseStore};

/// Fetch and delete operations over the customer store
///
/// Every store error is caught here: it is logged, shown as a toast, and
/// never returned to the caller.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl PartialEq for CustomerService {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Build the service for the configured backend
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn CustomerStore> = match &config.backend {
            Backend::Supabase { url, anon_key } => Arc::new(SupabaseStore::new(
                url.clone(),
                anon_key.clone(),
                config.customers_table.clone(),
            )),
            Backend::Memory => Arc::new(MemoryStore::new()),
        };
        Self::new(store)
    }

    /// All customers, newest first. `None` when the fetch failed.
    pub async fn fetch_customers<N: Notifier + ?Sized>(&self, notifier: &N) -> Option<Vec<Customer>> {
        debug!("Fetching customers");
        match self.store.list_customers().await {
            Ok(customers) => Some(customers),
            Err(e) => {
                error!("Error fetching customers: {}", e);
                notifier.notify(Toast::fetch_failed(&e));
                None
            }
        }
    }

    /// Delete one customer. Returns whether the store accepted the delete.
    pub async fn delete_customer<N: Notifier + ?Sized>(&self, id: i64, notifier: &N) -> bool {
        debug!("Deleting customer {}", id);
        match self.store.delete_customer(id).await {
            Ok(()) => {
                info!("Customer {} deleted", id);
                notifier.notify(Toast::deleted());
                true
            }
            Err(e) => {
                error!("Error deleting customer {}: {}", id, e);
                notifier.notify(Toast::delete_failed(&e));
                false
            }
        }
    }
}

/// Client-side copy of the customer table
///
/// Starts in the loading state. A finished fetch always clears loading; a
/// successful one replaces the list wholesale, a failed one leaves it as
/// it was.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerList {
    customers: Vec<Customer>,
    loading: bool,
}

impl Default for CustomerList {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerList {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            loading: true,
        }
    }

    pub fn finish_fetch(&mut self, fetched: Option<Vec<Customer>>) {
        if let Some(customers) = fetched {
            self.customers = customers;
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Customers matching the search term, cloned for rendering
    pub fn visible(&self, search_term: &str) -> Vec<Customer> {
        filter_customers(&self.customers, search_term)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Hook to access the customer service from components
pub fn use_customer_service() -> CustomerService {
    use_context::<CustomerService>()
}
