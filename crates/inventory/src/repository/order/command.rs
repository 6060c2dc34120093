use crate::{
    abstract_trait::OrderCommandRepositoryTrait, domain::requests::CreateOrderRequest,
    store::InventoryStore,
};
use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Order as OrderModel};
use std::sync::Arc;
use tracing::{error, info};

pub struct OrderCommandRepository {
    store: Arc<InventoryStore>,
}

impl OrderCommandRepository {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let order = self.store.create_order(req).await.map_err(|err| {
            error!(
                "❌ Failed to reserve {} of t-shirt ID {}: {err}",
                req.quantity, req.tshirt_id
            );
            err
        })?;

        info!(
            "✅ Created order ID {} ({} x t-shirt ID {})",
            order.id, order.quantity, order.tshirt_id
        );
        Ok(order)
    }

    async fn delete_order(&self, order_id: i32) -> Result<OrderModel, RepositoryError> {
        let order = self.store.delete_order(order_id).await.map_err(|err| {
            error!("❌ Failed to delete order ID {order_id}: {err}");
            err
        })?;

        info!(
            "✅ Deleted order ID {} and restored {} to t-shirt ID {}",
            order.id, order.quantity, order.tshirt_id
        );
        Ok(order)
    }
}
