use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Payment status value shown with the primary badge
pub const PAYMENT_STATUS_PAID: &str = "دفع";

/// Renewal status value shown with the primary badge
pub const RENEWAL_STATUS_DONE: &str = "تم";

/// A row of the `customers` table
///
/// Ids and timestamps are assigned by the store; the client only ever
/// holds a copy that is replaced on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub customer_name: String,
    pub mobile_number: i64,
    /// Data-plan tier in gigabytes
    pub line_type: i32,
    pub charging_date: Option<NaiveDate>,
    pub arrival_time: Option<String>,
    pub provider: Option<String>,
    pub ownership: Option<String>,
    pub payment_status: String,
    pub monthly_price: Option<f64>,
    pub renewal_status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PAYMENT_STATUS_PAID
    }

    pub fn is_renewed(&self) -> bool {
        self.renewal_status == RENEWAL_STATUS_DONE
    }
}
