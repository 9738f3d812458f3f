use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use http_common::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// OpenAPI documentation for the categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        create_category,
        get_category,
        update_category,
        delete_category,
    ),
    components(schemas(Category, CreateCategory, UpdateCategory, ErrorResponse)),
    tags(
        (name = "categories", description = "Category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the category router with all HTTP endpoints
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .with_state(shared_service)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> InventoryResult<Json<Vec<Category>>> {
    let categories = service.list_categories().await?;
    Ok(Json(categories))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = "categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = Category),
        (status = 400, description = "Name missing or invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> InventoryResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<i32>,
) -> InventoryResult<Json<Category>> {
    let category = service.get_category(id).await?;
    Ok(Json(category))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated successfully", body = Category),
        (status = 400, description = "Name missing or invalid", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> InventoryResult<Json<Category>> {
    let category = service.update_category(id, input).await?;
    Ok(Json(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "categories",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted successfully"),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 409, description = "Category still has products", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Path(id): Path<i32>,
) -> InventoryResult<impl IntoResponse> {
    service.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
