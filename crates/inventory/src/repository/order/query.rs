use crate::{abstract_trait::OrderQueryRepositoryTrait, store::InventoryStore};
use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Order as OrderModel};
use std::sync::Arc;

pub struct OrderQueryRepository {
    store: Arc<InventoryStore>,
}

impl OrderQueryRepository {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        Ok(self.store.orders().await)
    }
}
