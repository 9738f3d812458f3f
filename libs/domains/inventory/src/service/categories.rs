use std::sync::Arc;

use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Service layer for category business logic
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories
    pub async fn list_categories(&self) -> InventoryResult<Vec<Category>> {
        self.repository.list().await
    }

    /// Get a category by ID
    pub async fn get_category(&self, id: i32) -> InventoryResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::CategoryNotFound(id))
    }

    /// Create a new category with validation
    pub async fn create_category(&self, input: CreateCategory) -> InventoryResult<Category> {
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        // Whitespace-only names count as missing.
        if input.name.trim().is_empty() {
            return Err(InventoryError::NameRequired);
        }

        self.repository.create(input).await
    }

    /// Update an existing category
    pub async fn update_category(
        &self,
        id: i32,
        input: UpdateCategory,
    ) -> InventoryResult<Category> {
        input
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        if input.name.trim().is_empty() {
            return Err(InventoryError::NameRequired);
        }

        self.repository.update(id, input).await
    }

    /// Delete a category, refused while products still reference it
    pub async fn delete_category(&self, id: i32) -> InventoryResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;

    #[tokio::test]
    async fn test_create_category_rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            // No expectations: the repository must never be reached.
            let mock_repo = MockCategoryRepository::new();
            let service = CategoryService::new(mock_repo);

            let result = service
                .create_category(CreateCategory {
                    name: name.to_string(),
                    description: None,
                })
                .await;

            assert!(matches!(result, Err(InventoryError::NameRequired)));
        }
    }

    #[tokio::test]
    async fn test_create_category_passes_valid_input_through() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_create().returning(|input| {
            Ok(Category {
                id: 1,
                name: input.name,
                description: input.description,
            })
        });

        let service = CategoryService::new(mock_repo);
        let category = service
            .create_category(CreateCategory {
                name: "Bebidas".to_string(),
                description: Some("Bebidas frías y calientes".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Bebidas");
    }

    #[tokio::test]
    async fn test_update_category_rejects_blank_names() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(mock_repo);

        let result = service
            .update_category(
                1,
                UpdateCategory {
                    name: "  ".to_string(),
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::NameRequired)));
    }

    #[tokio::test]
    async fn test_get_category_maps_missing_to_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(7))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.get_category(7).await;

        assert!(matches!(result, Err(InventoryError::CategoryNotFound(7))));
    }
}
