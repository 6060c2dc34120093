use crate::{abstract_trait::TshirtCommandRepositoryTrait, store::InventoryStore};
use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Tshirt as TshirtModel};
use std::sync::Arc;
use tracing::info;

pub struct TshirtCommandRepository {
    store: Arc<InventoryStore>,
}

impl TshirtCommandRepository {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TshirtCommandRepositoryTrait for TshirtCommandRepository {
    async fn reset_inventory(&self) -> Result<Vec<TshirtModel>, RepositoryError> {
        let tshirts = self.store.reset().await;

        info!("✅ Catalog reset to seed ({} items)", tshirts.len());
        Ok(tshirts)
    }

    async fn restock_low_stock(&self) -> Result<usize, RepositoryError> {
        let restocked = self.store.restock().await;

        info!("✅ Restocked {restocked} low-stock item(s)");
        Ok(restocked)
    }
}
