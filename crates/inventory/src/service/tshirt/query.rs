use crate::{
    abstract_trait::{DynTshirtQueryRepository, TshirtQueryServiceTrait},
    domain::response::TshirtResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[derive(Clone)]
pub struct TshirtQueryService {
    query: DynTshirtQueryRepository,
}

impl TshirtQueryService {
    pub fn new(query: DynTshirtQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl TshirtQueryServiceTrait for TshirtQueryService {
    async fn find_all(&self) -> Result<Vec<TshirtResponse>, ServiceError> {
        let tshirts = self.query.find_all().await?;

        Ok(tshirts.into_iter().map(TshirtResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<TshirtResponse, ServiceError> {
        let tshirt = self
            .query
            .find_by_id(id)
            .await
            .map_err(|err| ServiceError::from_repo(err, "T-shirt"))?;

        Ok(tshirt.into())
    }
}
