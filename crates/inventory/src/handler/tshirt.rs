use crate::{
    abstract_trait::{DynTshirtQueryService, TshirtQueryServiceTrait},
    domain::response::TshirtResponse,
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::get};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/tshirts",
    tag = "Tshirt",
    responses(
        (status = 200, description = "Catalog of t-shirt variants", body = Vec<TshirtResponse>)
    )
)]
pub async fn get_tshirts(
    Extension(service): Extension<DynTshirtQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let tshirts = service.find_all().await?;

    Ok((StatusCode::OK, Json(tshirts)))
}

pub fn tshirt_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/tshirts", get(get_tshirts))
        .layer(Extension(app_state.di_container.tshirt_query.clone()))
}
