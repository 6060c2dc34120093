//! Client-side cart mirror: a local projection of catalog stock that gives
//! instant add/update feedback without a server round trip. The projection
//! is a UX hint only; the server re-validates every order it receives.

mod checkout;
mod error;
mod mirror;

pub use self::checkout::{
    CheckoutReport, Customer, LineOutcome, OrderDraft, OrderPlacer, PlaceOrderError,
};
pub use self::error::CartError;
pub use self::mirror::{CartLine, CartMirror};
