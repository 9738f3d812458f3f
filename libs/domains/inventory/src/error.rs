use axum::response::{IntoResponse, Response};
use http_common::AppError;
use thiserror::Error;

/// Domain errors for the inventory context.
///
/// `Display` carries the exact user-facing message for each rule violation;
/// callers render it verbatim.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("El nombre es obligatorio")]
    NameRequired,

    #[error("Debes seleccionar una categoría")]
    CategoryRequired,

    #[error("Cantidad inválida.")]
    InvalidQuantity,

    #[error("Categoría no encontrada")]
    CategoryNotFound(i32),

    #[error("Producto no encontrado.")]
    ProductNotFound(i32),

    #[error("No hay suficiente stock.")]
    InsufficientStock { available: i32, requested: i32 },

    #[error("La categoría tiene productos asociados")]
    CategoryInUse(i32),

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        let message = err.to_string();
        match err {
            InventoryError::NameRequired
            | InventoryError::CategoryRequired
            | InventoryError::InvalidQuantity
            | InventoryError::Validation(_) => AppError::BadRequest(message),
            InventoryError::CategoryNotFound(_) | InventoryError::ProductNotFound(_) => {
                AppError::NotFound(message)
            }
            InventoryError::InsufficientStock { .. } | InventoryError::CategoryInUse(_) => {
                AppError::Conflict(message)
            }
            InventoryError::Database(_) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_errors_map_to_400() {
        for err in [
            InventoryError::NameRequired,
            InventoryError::CategoryRequired,
            InventoryError::InvalidQuantity,
        ] {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_not_found_errors_map_to_404() {
        let resp = InventoryError::ProductNotFound(99).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = InventoryError::CategoryNotFound(99).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_errors_map_to_409() {
        let resp = InventoryError::InsufficientStock {
            available: 10,
            requested: 20,
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = InventoryError::CategoryInUse(1).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            InventoryError::NameRequired.to_string(),
            "El nombre es obligatorio"
        );
        assert_eq!(
            InventoryError::CategoryRequired.to_string(),
            "Debes seleccionar una categoría"
        );
        assert_eq!(InventoryError::InvalidQuantity.to_string(), "Cantidad inválida.");
        assert_eq!(
            InventoryError::ProductNotFound(1).to_string(),
            "Producto no encontrado."
        );
        assert_eq!(
            InventoryError::CategoryNotFound(1).to_string(),
            "Categoría no encontrada"
        );
        assert_eq!(
            InventoryError::InsufficientStock {
                available: 1,
                requested: 2
            }
            .to_string(),
            "No hay suficiente stock."
        );
        assert_eq!(
            InventoryError::CategoryInUse(1).to_string(),
            "La categoría tiene productos asociados"
        );
    }
}
