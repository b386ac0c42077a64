use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info};

use crate::db::models::Customer;
use crate::db::store::{CustomerStore, StoreError};

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Customer store backed by a Supabase project's REST endpoint
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    anon_key: String,
    table: String,
}

impl SupabaseStore {
    pub fn new(base_url: String, anon_key: String, table: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            table,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Turn a non-2xx response into a `StoreError::Api`
    async fn api_error(response: Response) -> StoreError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return StoreError::Request(e),
        };

        match serde_json::from_str::<PostgrestError>(&body) {
            Ok(err) => {
                debug!(
                    "PostgREST error {}: details={:?} hint={:?}",
                    status, err.details, err.hint
                );
                StoreError::Api {
                    status: status.as_u16(),
                    code: err.code,
                    message: err.message,
                }
            }
            Err(_) => StoreError::Api {
                status: status.as_u16(),
                code: None,
                message: if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body
                },
            },
        }
    }
}

#[async_trait::async_trait]
impl CustomerStore for SupabaseStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response.text().await?;
        let customers: Vec<Customer> = serde_json::from_str(&body)?;
        info!("Fetched {} customers", customers.len());
        Ok(customers)
    }

    async fn delete_customer(&self, id: i64) -> Result<(), StoreError> {
        let filter = format!("eq.{}", id);
        let response = self
            .client
            .delete(self.table_url())
            .query(&[("id", filter.as_str())])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        info!("Deleted customer {}", id);
        Ok(())
    }
}
