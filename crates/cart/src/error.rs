use thiserror::Error;

/// Soft, user-facing rejections from the local cart. None of these touch
/// server state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Only {available} left in stock")]
    OutOfStock { available: i32 },

    #[error("No such item in the catalog")]
    UnknownItem,
}
