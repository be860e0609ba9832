use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub is_available: bool,
    /// Stamped from the authenticated principal at creation; never changes.
    pub creator_account_id: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}
