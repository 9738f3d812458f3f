use axum::Router;

use domain_inventory::{
    AuditService, CategoryService, PgAuditRepository, PgCategoryRepository, PgProductRepository,
    PgStockRepository, ProductService, StockService, handlers,
};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// All repositories share the same connection pool; cloning the handle is cheap.
pub fn routes(state: &crate::state::AppState) -> Router {
    let category_service = CategoryService::new(PgCategoryRepository::new(state.db.clone()));
    let product_service = ProductService::new(PgProductRepository::new(state.db.clone()));
    let stock_service = StockService::new(PgStockRepository::new(state.db.clone()));
    let audit_service = AuditService::new(PgAuditRepository::new(state.db.clone()));

    Router::new()
        .nest("/categories", handlers::categories::router(category_service))
        .nest("/products", handlers::products::router(product_service))
        .nest("/stock", handlers::stock::router(stock_service))
        .nest("/audit", handlers::audit::router(audit_service))
}

/// Creates a router with the /ready endpoint that performs an actual database check.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
