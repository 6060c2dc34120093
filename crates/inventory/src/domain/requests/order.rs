use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderRequest {
    // Not validated: any id that matches no catalog item, zero and negative
    // included, is the store's NotFound, not a validation failure.
    #[serde(rename = "tshirt_id")]
    pub tshirt_id: i32,

    #[validate(length(min = 1, message = "customer_name must not be empty"))]
    #[serde(rename = "customer_name")]
    pub customer_name: String,

    #[validate(length(equal = 10, message = "customer_phone must be 10 digits"))]
    #[serde(rename = "customer_phone")]
    pub customer_phone: String,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
}
