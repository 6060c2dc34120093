use crate::domain::response::TshirtResponse;
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    model::Tshirt as TshirtModel,
};
use std::sync::Arc;

pub type DynTshirtQueryRepository = Arc<dyn TshirtQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TshirtQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<TshirtModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<TshirtModel, RepositoryError>;
}

pub type DynTshirtCommandRepository = Arc<dyn TshirtCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TshirtCommandRepositoryTrait {
    async fn reset_inventory(&self) -> Result<Vec<TshirtModel>, RepositoryError>;
    async fn restock_low_stock(&self) -> Result<usize, RepositoryError>;
}

pub type DynTshirtQueryService = Arc<dyn TshirtQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TshirtQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<TshirtResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<TshirtResponse, ServiceError>;
}

pub type DynTshirtCommandService = Arc<dyn TshirtCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TshirtCommandServiceTrait {
    async fn reset_inventory(&self) -> Result<(), ServiceError>;
    async fn update_stock(&self) -> Result<(), ServiceError>;
}
