use crate::db::models::Customer;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend answered with an error body; `message` is what it said
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Remote collection of customer records
///
/// Implementations never filter or paginate; the caller gets the whole
/// table, newest first.
#[async_trait::async_trait]
pub trait CustomerStore: Send + Sync {
    /// All records ordered by `created_at` descending
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;

    /// Remove the record with this id. Deleting an id that does not exist
    /// is not an error.
    async fn delete_customer(&self, id: i64) -> Result<(), StoreError>;
}
