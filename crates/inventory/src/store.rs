use crate::domain::requests::CreateOrderRequest;
use chrono::Utc;
use rand::Rng;
use shared::{
    errors::RepositoryError,
    model::{Order, OrderStatus, Tshirt},
};
use tokio::sync::Mutex;

/// Items below this stock level are eligible for a restock top-up.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Bounds (inclusive) of the random amount a restock adds per item.
pub const RESTOCK_MIN: i32 = 1;
pub const RESTOCK_MAX: i32 = 3;

struct StoreInner {
    tshirts: Vec<Tshirt>,
    orders: Vec<Order>,
    next_order_id: i32,
}

/// In-memory catalog and order ledger.
///
/// Every compound operation (check-then-decrement, delete-then-restore,
/// reset, restock) runs under a single lock acquisition, so concurrent
/// requests racing on the same item can never oversell inventory.
pub struct InventoryStore {
    seed: Vec<Tshirt>,
    inner: Mutex<StoreInner>,
}

impl InventoryStore {
    pub fn new(seed: Vec<Tshirt>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                tshirts: seed.clone(),
                orders: Vec::new(),
                next_order_id: 1,
            }),
            seed,
        }
    }

    pub async fn tshirts(&self) -> Vec<Tshirt> {
        self.inner.lock().await.tshirts.clone()
    }

    pub async fn find_tshirt(&self, id: i32) -> Option<Tshirt> {
        self.inner
            .lock()
            .await
            .tshirts
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.inner.lock().await.orders.clone()
    }

    /// Atomically reserves stock and appends the order.
    ///
    /// The embedded snapshot is taken before the decrement, so its
    /// `quantity` is the stock level the customer saw when ordering.
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        let mut inner = self.inner.lock().await;

        let tshirt = inner
            .tshirts
            .iter_mut()
            .find(|t| t.id == req.tshirt_id)
            .ok_or(RepositoryError::NotFound)?;

        if tshirt.quantity < req.quantity {
            return Err(RepositoryError::InsufficientStock {
                requested: req.quantity,
                available: tshirt.quantity,
            });
        }

        let snapshot = tshirt.clone();
        tshirt.quantity -= req.quantity;

        let order = Order {
            id: inner.next_order_id,
            customer_name: req.customer_name.clone(),
            customer_phone: req.customer_phone.clone(),
            tshirt_id: req.tshirt_id,
            quantity: req.quantity,
            status: OrderStatus::Pending,
            order_date: Utc::now(),
            tshirt: snapshot,
        };

        inner.next_order_id += 1;
        inner.orders.push(order.clone());

        Ok(order)
    }

    /// Removes the order and reverses its stock effect. The restore is a
    /// no-op if the referenced item no longer exists.
    pub async fn delete_order(&self, order_id: i32) -> Result<Order, RepositoryError> {
        let mut inner = self.inner.lock().await;

        let index = inner
            .orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or(RepositoryError::NotFound)?;

        let order = inner.orders.remove(index);

        if let Some(tshirt) = inner.tshirts.iter_mut().find(|t| t.id == order.tshirt_id) {
            tshirt.quantity += order.quantity;
        }

        Ok(order)
    }

    /// Restores the seed catalog exactly. The order ledger is kept; old
    /// orders stay renderable through their embedded snapshots.
    pub async fn reset(&self) -> Vec<Tshirt> {
        let mut inner = self.inner.lock().await;
        inner.tshirts = self.seed.clone();
        inner.tshirts.clone()
    }

    /// Tops up every low-stock item by a random amount in
    /// [`RESTOCK_MIN`, `RESTOCK_MAX`]. Returns how many items changed.
    pub async fn restock(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let mut rng = rand::rng();

        let mut restocked = 0;
        for tshirt in inner
            .tshirts
            .iter_mut()
            .filter(|t| t.quantity < LOW_STOCK_THRESHOLD)
        {
            tshirt.quantity += rng.random_range(RESTOCK_MIN..=RESTOCK_MAX);
            restocked += 1;
        }

        restocked
    }
}
