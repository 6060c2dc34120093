use serde::{Deserialize, Serialize};
use shared::model::{Size, Tshirt as TshirtModel};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct TshirtResponse {
    pub id: i32,
    #[serde(rename = "design_name")]
    pub design_name: String,
    pub size: Size,
    pub color: String,
    pub price: i32,
    pub quantity: i32,
}

// model to response
impl From<TshirtModel> for TshirtResponse {
    fn from(value: TshirtModel) -> Self {
        TshirtResponse {
            id: value.id,
            design_name: value.design_name,
            size: value.size,
            color: value.color,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

// response to model, for clients mirroring the catalog locally
impl From<TshirtResponse> for TshirtModel {
    fn from(value: TshirtResponse) -> Self {
        TshirtModel {
            id: value.id,
            design_name: value.design_name,
            size: value.size,
            color: value.color,
            price: value.price,
            quantity: value.quantity,
        }
    }
}
