use crate::abstract_trait::{DynTshirtCommandRepository, TshirtCommandServiceTrait};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

#[derive(Clone)]
pub struct TshirtCommandService {
    command: DynTshirtCommandRepository,
}

impl TshirtCommandService {
    pub fn new(command: DynTshirtCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl TshirtCommandServiceTrait for TshirtCommandService {
    async fn reset_inventory(&self) -> Result<(), ServiceError> {
        info!("Resetting inventory to seed catalog");

        self.command.reset_inventory().await?;
        Ok(())
    }

    async fn update_stock(&self) -> Result<(), ServiceError> {
        info!("Running restock pass over low-stock items");

        self.command.restock_low_stock().await?;
        Ok(())
    }
}
