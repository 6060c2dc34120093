mod order;
mod tshirt;

pub use self::order::{Order, OrderStatus};
pub use self::tshirt::{Size, Tshirt};
