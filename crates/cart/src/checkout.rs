use crate::mirror::CartMirror;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

/// Customer details attached to every order placed from the cart.
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

/// One order the cart wants the server to reserve.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub tshirt_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub quantity: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceOrderError {
    /// The server refused the order (unknown item, insufficient stock,
    /// validation failure).
    #[error("{0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Transport seam for checkout: HTTP client in the app, in-process service
/// or stub in tests.
#[async_trait]
pub trait OrderPlacer {
    /// Places one order and returns the server-assigned order id.
    async fn place(&self, draft: &OrderDraft) -> Result<i32, PlaceOrderError>;
}

#[derive(Debug)]
pub struct LineOutcome {
    pub tshirt_id: i32,
    pub quantity: i32,
    pub result: Result<i32, PlaceOrderError>,
}

/// Per-line results of a checkout. Lines the server accepted are never
/// rolled back when a sibling line fails; the report says exactly which
/// lines went through.
#[derive(Debug)]
pub struct CheckoutReport {
    pub outcomes: Vec<LineOutcome>,
}

impl CheckoutReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

impl CartMirror {
    /// Issues one reservation per cart line, sequentially. Each line is an
    /// independent reservation; there is no cross-item transaction. The
    /// cart is cleared only when every line succeeded, after which callers
    /// should re-sync from the authoritative catalog.
    pub async fn checkout(
        &mut self,
        customer: &Customer,
        placer: &dyn OrderPlacer,
    ) -> CheckoutReport {
        let mut outcomes = Vec::with_capacity(self.lines().len());

        for line in self.lines() {
            let draft = OrderDraft {
                tshirt_id: line.tshirt_id,
                customer_name: customer.name.clone(),
                customer_phone: customer.phone.clone(),
                quantity: line.quantity,
            };

            let result = placer.place(&draft).await;

            match &result {
                Ok(order_id) => info!(
                    "Checkout line accepted: order ID {order_id} ({} x t-shirt ID {})",
                    line.quantity, line.tshirt_id
                ),
                Err(err) => warn!(
                    "Checkout line rejected for t-shirt ID {}: {err}",
                    line.tshirt_id
                ),
            }

            outcomes.push(LineOutcome {
                tshirt_id: line.tshirt_id,
                quantity: line.quantity,
                result,
            });
        }

        let report = CheckoutReport { outcomes };

        if report.all_succeeded() {
            self.clear();
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::model::{Size, Tshirt};
    use std::sync::Mutex;

    struct StubPlacer {
        reject_tshirt_id: Option<i32>,
        next_id: Mutex<i32>,
    }

    impl StubPlacer {
        fn accepting() -> Self {
            Self {
                reject_tshirt_id: None,
                next_id: Mutex::new(1),
            }
        }

        fn rejecting(tshirt_id: i32) -> Self {
            Self {
                reject_tshirt_id: Some(tshirt_id),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl OrderPlacer for StubPlacer {
        async fn place(&self, draft: &OrderDraft) -> Result<i32, PlaceOrderError> {
            if self.reject_tshirt_id == Some(draft.tshirt_id) {
                return Err(PlaceOrderError::Rejected("Insufficient stock".into()));
            }

            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            Ok(id)
        }
    }

    fn loaded_cart() -> CartMirror {
        let mut cart = CartMirror::new();
        cart.sync(vec![
            Tshirt {
                id: 1,
                design_name: "Winging It".into(),
                size: Size::S,
                color: "Black".into(),
                price: 720,
                quantity: 10,
            },
            Tshirt {
                id: 2,
                design_name: "Game Night".into(),
                size: Size::M,
                color: "Black".into(),
                price: 720,
                quantity: 9,
            },
        ]);
        cart.add(1).unwrap();
        cart.add(2).unwrap();
        cart
    }

    fn customer() -> Customer {
        Customer {
            name: "Asha".into(),
            phone: "9876543210".into(),
        }
    }

    #[tokio::test]
    async fn full_success_clears_the_cart() {
        let mut cart = loaded_cart();
        let placer = StubPlacer::accepting();

        let report = cart.checkout(&customer(), &placer).await;

        assert!(report.all_succeeded());
        assert_eq!(report.outcomes.len(), 2);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn partial_failure_keeps_the_cart_and_reports_per_line() {
        let mut cart = loaded_cart();
        let placer = StubPlacer::rejecting(2);

        let report = cart.checkout(&customer(), &placer).await;

        assert!(!report.all_succeeded());

        let failed: Vec<i32> = report.failures().map(|o| o.tshirt_id).collect();
        assert_eq!(failed, vec![2]);

        // Line 1 was accepted server-side and is not rolled back.
        assert_eq!(report.outcomes[0].result, Ok(1));

        // The cart stays intact so the user can retry or adjust.
        assert_eq!(cart.lines().len(), 2);
    }
}
