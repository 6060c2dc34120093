use crate::{
    abstract_trait::{DynTshirtCommandService, TshirtCommandServiceTrait},
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use shared::errors::{HttpError, MessageResponse};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/reset-inventory",
    tag = "Inventory",
    responses(
        (status = 200, description = "Catalog replaced with the seed set", body = MessageResponse)
    )
)]
pub async fn reset_inventory(
    Extension(service): Extension<DynTshirtCommandService>,
) -> Result<impl IntoResponse, HttpError> {
    service.reset_inventory().await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Inventory reset successfully".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/update-stock",
    tag = "Inventory",
    responses(
        (status = 200, description = "Low-stock items topped up", body = MessageResponse)
    )
)]
pub async fn update_stock(
    Extension(service): Extension<DynTshirtCommandService>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_stock().await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Stock updated successfully".to_string(),
        }),
    ))
}

pub fn inventory_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/reset-inventory", post(reset_inventory))
        .route("/api/update-stock", post(update_stock))
        .layer(Extension(app_state.di_container.tshirt_command.clone()))
}
