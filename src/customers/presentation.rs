use chrono::{Datelike, NaiveDate};

use crate::db::Customer;

/// Shown in place of any missing value
pub const PLACEHOLDER: &str = "-";

pub const TITLE: &str = "إدارة العملاء";
pub const SEARCH_PLACEHOLDER: &str = "البحث بالاسم أو رقم الموبايل...";
pub const NO_SEARCH_RESULTS: &str = "لا توجد نتائج للبحث";
pub const NO_CUSTOMERS: &str = "لا توجد عملاء";

pub const COLUMN_HEADERS: [&str; 9] = [
    "اسم العميل",
    "رقم الموبايل",
    "نوع الخط",
    "تاريخ الشحن",
    "حالة الدفع",
    "السعر الشهري",
    "حالة التجديد",
    "مقدم الخدمة",
    "الإجراءات",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Destructive => "badge badge-destructive",
        }
    }
}

pub fn payment_badge(status: &str) -> BadgeVariant {
    if status == crate::db::PAYMENT_STATUS_PAID {
        BadgeVariant::Default
    } else {
        BadgeVariant::Destructive
    }
}

pub fn renewal_badge(status: &str) -> BadgeVariant {
    if status == crate::db::RENEWAL_STATUS_DONE {
        BadgeVariant::Default
    } else {
        BadgeVariant::Secondary
    }
}

pub fn total_label(count: usize) -> String {
    format!("إجمالي العملاء: {}", count)
}

/// Message for an empty table body
pub fn empty_message(search_term: &str) -> &'static str {
    if search_term.is_empty() {
        NO_CUSTOMERS
    } else {
        NO_SEARCH_RESULTS
    }
}

pub fn delete_prompt(customer_name: &str) -> String {
    format!(
        "هل أنت متأكد من حذف العميل \"{}\"؟ هذا الإجراء لا يمكن التراجع عنه.",
        customer_name
    )
}

pub fn format_line_type(line_type: i32) -> String {
    format!("{} جيجا", line_type)
}

/// Day/month/year in Arabic-Indic digits, as the Egyptian Arabic locale writes dates
pub fn format_charging_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => arabic_digits(&format!("{}/{}/{}", date.day(), date.month(), date.year())),
        None => PLACEHOLDER.to_string(),
    }
}

/// Zero counts as no price
pub fn format_monthly_price(price: Option<f64>) -> String {
    match price {
        Some(price) if price != 0.0 && !price.is_nan() => format!("{} جنيه", price),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_provider(provider: Option<&str>) -> String {
    match provider {
        Some(provider) if !provider.is_empty() => capitalize_words(provider),
        _ => PLACEHOLDER.to_string(),
    }
}

fn arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Display-ready cells for one table row
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub mobile_number: String,
    pub line_type: String,
    pub charging_date: String,
    pub payment_status: String,
    pub payment_badge: BadgeVariant,
    pub monthly_price: String,
    pub renewal_status: String,
    pub renewal_badge: BadgeVariant,
    pub provider: String,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.customer_name.clone(),
            mobile_number: customer.mobile_number.to_string(),
            line_type: format_line_type(customer.line_type),
            charging_date: format_charging_date(customer.charging_date),
            payment_status: customer.payment_status.clone(),
            payment_badge: payment_badge(&customer.payment_status),
            monthly_price: format_monthly_price(customer.monthly_price),
            renewal_status: customer.renewal_status.clone(),
            renewal_badge: renewal_badge(&customer.renewal_status),
            provider: format_provider(customer.provider.as_deref()),
        }
    }
}
