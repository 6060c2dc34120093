pub mod order;
pub mod tshirt;
