use crate::model::tshirt::Tshirt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A customer order. `tshirt` is a point-in-time copy of the catalog item
/// taken at creation; later catalog changes never alter it.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub tshirt_id: i32,
    pub quantity: i32,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub tshirt: Tshirt,
}
