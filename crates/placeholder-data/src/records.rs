//! Fixture record types.

use serde::Serialize;
use time::Date;
use uuid::Uuid;

/// A dashboard login. The password is plaintext here and must be hashed before it is stored.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    #[serde(skip)]
    pub password: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

/// An invoice. Its own id is assigned by the database on insert.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Invoice {
    pub customer_id: Uuid,
    /// Amount in cents.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Label stored in the `invoices.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

/// Revenue for one month, keyed by a short month label such as `"Jan"`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Revenue {
    pub month: &'static str,
    pub revenue: i32,
}
