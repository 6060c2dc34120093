use crate::domain::response::tshirt::TshirtResponse;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use shared::model::{Order as OrderModel, OrderStatus};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "customer_name")]
    pub customer_name: String,
    #[serde(rename = "customer_phone")]
    pub customer_phone: String,
    #[serde(rename = "tshirt_id")]
    pub tshirt_id: i32,
    pub quantity: i32,
    pub status: OrderStatus,
    #[serde(rename = "order_date")]
    pub order_date: String,
    pub tshirt: TshirtResponse,
}

// model to response
impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.id,
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            tshirt_id: value.tshirt_id,
            quantity: value.quantity,
            status: value.status,
            order_date: value
                .order_date
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            tshirt: value.tshirt.into(),
        }
    }
}
