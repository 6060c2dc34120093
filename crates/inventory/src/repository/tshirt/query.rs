use crate::{abstract_trait::TshirtQueryRepositoryTrait, store::InventoryStore};
use async_trait::async_trait;
use shared::{errors::RepositoryError, model::Tshirt as TshirtModel};
use std::sync::Arc;
use tracing::error;

pub struct TshirtQueryRepository {
    store: Arc<InventoryStore>,
}

impl TshirtQueryRepository {
    pub fn new(store: Arc<InventoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TshirtQueryRepositoryTrait for TshirtQueryRepository {
    async fn find_all(&self) -> Result<Vec<TshirtModel>, RepositoryError> {
        Ok(self.store.tshirts().await)
    }

    async fn find_by_id(&self, id: i32) -> Result<TshirtModel, RepositoryError> {
        self.store.find_tshirt(id).await.ok_or_else(|| {
            error!("❌ T-shirt ID {id} not found");
            RepositoryError::NotFound
        })
    }
}
