#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use customer_desk::customers::{Notifier, Toast};
use customer_desk::db::{Customer, CustomerStore, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn created_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 9, 30, 0).unwrap()
}

pub fn make_customer(id: i64, name: &str, mobile: i64, day: u32) -> Customer {
    Customer {
        id,
        customer_name: name.to_string(),
        mobile_number: mobile,
        line_type: 140,
        charging_date: None,
        arrival_time: None,
        provider: Some("vodafone".to_string()),
        ownership: None,
        payment_status: "دفع".to_string(),
        monthly_price: Some(250.0),
        renewal_status: "تم".to_string(),
        notes: None,
        created_at: created_at(day),
        updated_at: created_at(day),
    }
}

/// Notifier that keeps every toast it receives
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}

/// Store whose every call fails with the same API error
pub struct FailingStore {
    pub message: String,
}

#[async_trait::async_trait]
impl CustomerStore for FailingStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        Err(StoreError::Api {
            status: 503,
            code: None,
            message: self.message.clone(),
        })
    }

    async fn delete_customer(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Api {
            status: 503,
            code: None,
            message: self.message.clone(),
        })
    }
}

/// Wraps a store and counts the calls that reach it
pub struct CountingStore<S> {
    inner: S,
    lists: AtomicUsize,
    deletes: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            lists: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl<S: CustomerStore> CustomerStore for CountingStore<S> {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.inner.list_customers().await
    }

    async fn delete_customer(&self, id: i64) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_customer(id).await
    }
}
