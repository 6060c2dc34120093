use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Garment sizes as they appear on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    #[serde(rename = "2XL")]
    Xxl,
    #[serde(rename = "3XL")]
    Xxxl,
}

/// One catalog variant: design x size x color, with price in whole rupees.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Tshirt {
    pub id: i32,
    pub design_name: String,
    pub size: Size,
    pub color: String,
    pub price: i32,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_serializes_to_wire_strings() {
        assert_eq!(serde_json::to_string(&Size::S).unwrap(), "\"S\"");
        assert_eq!(serde_json::to_string(&Size::Xxl).unwrap(), "\"2XL\"");
        assert_eq!(serde_json::to_string(&Size::Xxxl).unwrap(), "\"3XL\"");
    }

    #[test]
    fn size_parses_wire_strings() {
        let size: Size = serde_json::from_str("\"2XL\"").unwrap();
        assert_eq!(size, Size::Xxl);
    }
}
