mod order;
mod tshirt;

pub use self::order::OrderResponse;
pub use self::tshirt::TshirtResponse;
