use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use http_common::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{CreateStockMovement, MovementWithProduct, Product, StockMovement};
use crate::repository::StockRepository;
use crate::service::StockService;

/// OpenAPI documentation for the stock API
#[derive(OpenApi)]
#[openapi(
    paths(list_stock_products, list_movements, record_movement),
    components(schemas(
        Product,
        StockMovement,
        MovementWithProduct,
        CreateStockMovement,
        ErrorResponse
    )),
    tags(
        (name = "stock", description = "Stock movement endpoints")
    )
)]
pub struct ApiDoc;

/// Create the stock router with all HTTP endpoints
pub fn router<R: StockRepository + 'static>(service: StockService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_stock_products))
        .route("/movements", get(list_movements).post(record_movement))
        .with_state(shared_service)
}

/// List all products with their current stock levels
#[utoipa::path(
    get,
    path = "/products",
    tag = "stock",
    responses(
        (status = 200, description = "Products with stock levels", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_stock_products<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
) -> InventoryResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// List all movements, newest first
#[utoipa::path(
    get,
    path = "/movements",
    tag = "stock",
    responses(
        (status = 200, description = "Movement history", body = Vec<MovementWithProduct>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_movements<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
) -> InventoryResult<Json<Vec<MovementWithProduct>>> {
    let movements = service.list_movements().await?;
    Ok(Json(movements))
}

/// Record a stock movement
#[utoipa::path(
    post,
    path = "/movements",
    tag = "stock",
    request_body = CreateStockMovement,
    responses(
        (status = 201, description = "Movement recorded", body = StockMovement),
        (status = 400, description = "Invalid product or quantity", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 409, description = "Not enough stock", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn record_movement<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateStockMovement>,
) -> InventoryResult<impl IntoResponse> {
    let movement = service.record_movement(input).await?;
    Ok((StatusCode::CREATED, Json(movement)))
}
