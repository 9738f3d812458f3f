use std::sync::Arc;

use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{CreateProduct, Product, ProductWithCategory, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products with their categories
    pub async fn list_products(&self) -> InventoryResult<Vec<ProductWithCategory>> {
        self.repository.list().await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> InventoryResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::ProductNotFound(id))
    }

    /// Create a new product with validation
    pub async fn create_product(&self, input: CreateProduct) -> InventoryResult<Product> {
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        if input.name.trim().is_empty() {
            return Err(InventoryError::NameRequired);
        }
        if input.category_id <= 0 {
            return Err(InventoryError::CategoryRequired);
        }

        self.repository.create(input).await
    }

    /// Update an existing product; stock is untouched here
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> InventoryResult<Product> {
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        if input.name.trim().is_empty() {
            return Err(InventoryError::NameRequired);
        }
        if input.category_id <= 0 {
            return Err(InventoryError::CategoryRequired);
        }

        self.repository.update(id, input).await
    }

    /// Delete a product along with its movement history
    pub async fn delete_product(&self, id: i32) -> InventoryResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::repository::MockProductRepository;

    fn valid_input() -> CreateProduct {
        CreateProduct {
            name: "Café".to_string(),
            price: Decimal::new(1250, 2),
            stock: 10,
            expires_at: None,
            image_url: None,
            active: true,
            category_id: 1,
        }
    }

    #[tokio::test]
    async fn test_create_product_rejects_blank_names() {
        for name in ["", "   "] {
            let mock_repo = MockProductRepository::new();
            let service = ProductService::new(mock_repo);

            let result = service
                .create_product(CreateProduct {
                    name: name.to_string(),
                    ..valid_input()
                })
                .await;

            assert!(matches!(result, Err(InventoryError::NameRequired)));
        }
    }

    #[tokio::test]
    async fn test_create_product_rejects_missing_category() {
        for category_id in [0, -3] {
            let mock_repo = MockProductRepository::new();
            let service = ProductService::new(mock_repo);

            let result = service
                .create_product(CreateProduct {
                    category_id,
                    ..valid_input()
                })
                .await;

            assert!(matches!(result, Err(InventoryError::CategoryRequired)));
        }
    }

    #[tokio::test]
    async fn test_create_product_passes_valid_input_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().returning(|input| {
            Ok(Product {
                id: 1,
                name: input.name,
                price: input.price,
                stock: input.stock,
                expires_at: input.expires_at,
                image_url: input.image_url,
                active: input.active,
                category_id: input.category_id,
            })
        });

        let service = ProductService::new(mock_repo);
        let product = service.create_product(valid_input()).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.stock, 10);
    }

    #[tokio::test]
    async fn test_update_product_rejects_missing_category() {
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let result = service
            .update_product(
                1,
                UpdateProduct {
                    name: "Café".to_string(),
                    price: Decimal::new(1250, 2),
                    expires_at: None,
                    image_url: None,
                    active: true,
                    category_id: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::CategoryRequired)));
    }

    #[tokio::test]
    async fn test_get_product_maps_missing_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(9))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(9).await;

        assert!(matches!(result, Err(InventoryError::ProductNotFound(9))));
    }
}
