use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use http_common::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{AuditFilter, ChangeLogEntry};
use crate::repository::AuditRepository;
use crate::service::AuditService;

/// OpenAPI documentation for the audit API
#[derive(OpenApi)]
#[openapi(
    paths(list_entries),
    components(schemas(ChangeLogEntry, ErrorResponse)),
    tags(
        (name = "audit", description = "Change log endpoints")
    )
)]
pub struct ApiDoc;

/// Create the audit router
pub fn router<R: AuditRepository + 'static>(service: AuditService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_entries))
        .with_state(shared_service)
}

/// List change log entries, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "audit",
    params(AuditFilter),
    responses(
        (status = 200, description = "Change log entries", body = Vec<ChangeLogEntry>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_entries<R: AuditRepository>(
    State(service): State<Arc<AuditService<R>>>,
    Query(filter): Query<AuditFilter>,
) -> InventoryResult<Json<Vec<ChangeLogEntry>>> {
    let entries = service.list_entries(filter).await?;
    Ok(Json(entries))
}
