mod inventory;
mod order;
mod tshirt;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::inventory::inventory_routes;
pub use self::order::order_routes;
pub use self::tshirt::tshirt_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        tshirt::get_tshirts,

        order::get_orders,
        order::create_order,
        order::delete_order,

        inventory::reset_inventory,
        inventory::update_stock,
    ),
    tags(
        (name = "Tshirt", description = "Catalog endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Inventory", description = "Inventory maintenance endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(tshirt_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(inventory_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
