use std::sync::Arc;

use crate::error::InventoryResult;
use crate::models::{AuditFilter, ChangeLogEntry};
use crate::repository::AuditRepository;

/// Service layer for reading the change log
#[derive(Clone)]
pub struct AuditService<R: AuditRepository> {
    repository: Arc<R>,
}

impl<R: AuditRepository> AuditService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List change log entries, newest first
    pub async fn list_entries(&self, filter: AuditFilter) -> InventoryResult<Vec<ChangeLogEntry>> {
        self.repository.list(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditAction, AuditEntity};
    use crate::repository::MockAuditRepository;

    #[tokio::test]
    async fn test_list_entries_passes_filter_through() {
        let mut mock_repo = MockAuditRepository::new();
        mock_repo
            .expect_list()
            .withf(|filter| {
                filter.entity == Some(AuditEntity::Product)
                    && filter.action == Some(AuditAction::Delete)
                    && filter.limit == 10
            })
            .returning(|_| Ok(vec![]));

        let service = AuditService::new(mock_repo);
        let entries = service
            .list_entries(AuditFilter {
                entity: Some(AuditEntity::Product),
                action: Some(AuditAction::Delete),
                limit: 10,
                offset: 0,
            })
            .await
            .unwrap();

        assert!(entries.is_empty());
    }
}
