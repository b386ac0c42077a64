use tokio::sync::RwLock;

use crate::db::models::Customer;
use crate::db::store::{CustomerStore, StoreError};

/// Customer store kept in process memory
///
/// Used for the offline dev mode and in tests. Follows the same ordering
/// contract as the remote store.
#[derive(Default)]
pub struct MemoryStore {
    customers: RwLock<Vec<Customer>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CustomerStore for MemoryStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let mut customers = self.customers.read().await.clone();
        customers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(customers)
    }

    async fn delete_customer(&self, id: i64) -> Result<(), StoreError> {
        self.customers.write().await.retain(|c| c.id != id);
        Ok(())
    }
}
