//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation and orchestrates repository
/// operations. Validation failures never reach the repository.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Update a product
    ///
    /// A body id that disagrees with the path id is rejected rather than
    /// silently ignored.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if let Some(body_id) = input.id {
            if body_id != id {
                return Err(ProductError::Validation(format!(
                    "body id {} does not match path id {}",
                    body_id, id
                )));
            }
        }

        self.repository.update(id, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate;

    #[tokio::test]
    async fn test_get_product_maps_missing_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(predicate::eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(id).await;

        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create_product(CreateProduct {
                name: String::new(),
                price: 10.0,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .create_product(CreateProduct {
                name: "TestProduct".to_string(),
                price: -0.01,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_body_id_mismatch() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                Uuid::now_v7(),
                UpdateProduct {
                    id: Some(Uuid::now_v7()),
                    name: "UpdatedProduct".to_string(),
                    price: 15.0,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_accepts_matching_body_id() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_update()
            .with(predicate::eq(id), predicate::always())
            .returning(move |id, input| {
                Ok(Product {
                    id,
                    name: input.name,
                    price: input.price,
                })
            });

        let service = ProductService::new(mock_repo);
        let updated = service
            .update_product(
                id,
                UpdateProduct {
                    id: Some(id),
                    name: "UpdatedProduct".to_string(),
                    price: 15.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "UpdatedProduct");
    }

    #[tokio::test]
    async fn test_delete_maps_missing_to_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(predicate::eq(id))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(id).await;

        assert!(matches!(result, Err(ProductError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_delete_succeeds_when_repository_deletes() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(predicate::eq(id))
            .returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(id).await.is_ok());
    }
}
