mod order;

pub use self::order::CreateOrderRequest;
