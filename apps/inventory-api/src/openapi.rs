//! OpenAPI documentation for the inventory API

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Inventory management API for categories, products, stock movements and audit history"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/categories", api = domain_inventory::handlers::categories::ApiDoc),
        (path = "/api/products", api = domain_inventory::handlers::products::ApiDoc),
        (path = "/api/stock", api = domain_inventory::handlers::stock::ApiDoc),
        (path = "/api/audit", api = domain_inventory::handlers::audit::ApiDoc)
    )
)]
pub struct ApiDoc;
