use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{requests::CreateOrderRequest, response::OrderResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository) -> Self {
        Self { command }
    }

    /// The HTTP edge already validates, but the reservation path is the
    /// sole authority over stock and must not trust its callers.
    fn validate(req: &CreateOrderRequest) -> Result<(), ServiceError> {
        let mut errors: Vec<String> = match req.validate() {
            Ok(()) => Vec::new(),
            Err(validation_errors) => validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid {field}"))
                    })
                })
                .collect(),
        };

        if !req.customer_phone.chars().all(|c| c.is_ascii_digit()) {
            errors.push("customer_phone must contain only digits".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(errors))
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        Self::validate(req)?;

        let order = self
            .command
            .create_order(req)
            .await
            .map_err(|err| ServiceError::from_repo(err, "T-shirt"))?;

        info!(
            "Order ID {} placed by {} for t-shirt ID {}",
            order.id, order.customer_name, order.tshirt_id
        );
        Ok(order.into())
    }

    async fn delete_order(&self, order_id: i32) -> Result<(), ServiceError> {
        self.command
            .delete_order(order_id)
            .await
            .map_err(|err| ServiceError::from_repo(err, "Order"))?;

        Ok(())
    }
}
