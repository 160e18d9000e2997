use serializer::PdfSerializer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{InfoProductDto, Product, ProductDto, ProductFilter};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    pdf: PdfSerializer,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            pdf: PdfSerializer::new(),
        }
    }

    /// Service writing PDF documents into a custom directory.
    pub fn with_pdf_output_dir(repository: R, output_dir: impl AsRef<Path>) -> Self {
        Self {
            repository: Arc::new(repository),
            pdf: PdfSerializer::with_output_dir(output_dir),
        }
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: Uuid) -> ProductResult<InfoProductDto> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        Ok(product.into())
    }

    /// List one page of products
    pub async fn get_all_products(&self, filter: ProductFilter) -> ProductResult<Vec<InfoProductDto>> {
        let products = self.repository.find_all(filter).await?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Create a new product, returning the generated id
    pub async fn create_product(&self, input: ProductDto) -> ProductResult<Uuid> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let product = Product::new(input);
        let saved = self.repository.save(product).await?;

        Ok(saved.id)
    }

    /// Update name, price and weight of an existing product
    pub async fn update_product(&self, id: Uuid, input: ProductDto) -> ProductResult<Uuid> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        product.apply_update(input);
        let updated = self.repository.update(product).await?;

        Ok(updated.id)
    }

    /// Delete a product
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.repository.delete(id).await
    }

    /// Render a product into a PDF document and return the file path
    pub async fn product_to_pdf(&self, id: Uuid) -> ProductResult<PathBuf> {
        let info = self.get_product(id).await?;
        let path = self.pdf.serialize(&info)?;

        tracing::info!(product_id = %id, path = %path.display(), "Rendered product PDF");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn stored_product(id: Uuid) -> Product {
        Product {
            id,
            name: "ProductName".to_string(),
            price: 100.0,
            weight: 50.0,
            created: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn get_unknown_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::new_v4();

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(id).await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_and_timestamp() {
        let mut mock_repo = MockProductRepository::new();
        let before = Utc::now().naive_utc();

        mock_repo.expect_save().returning(move |product| {
            assert!(product.created >= before);
            Ok(product)
        });

        let service = ProductService::new(mock_repo);
        let id = service
            .create_product(ProductDto {
                name: "ProductName".to_string(),
                price: 100.0,
                weight: 50.0,
            })
            .await
            .unwrap();

        assert!(!id.is_nil());
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_touching_the_store() {
        let mock_repo = MockProductRepository::new();

        let service = ProductService::new(mock_repo);
        let result = service
            .create_product(ProductDto {
                name: String::new(),
                price: 100.0,
                weight: 50.0,
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn update_merges_fields_and_keeps_identity() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::new_v4();
        let existing = stored_product(id);
        let created = existing.created;

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .return_once(move |_| Ok(Some(existing)));
        mock_repo.expect_update().returning(move |product| {
            assert_eq!(product.id, id);
            assert_eq!(product.created, created);
            assert_eq!(product.name, "Renamed");
            Ok(product)
        });

        let service = ProductService::new(mock_repo);
        let returned = service
            .update_product(
                id,
                ProductDto {
                    name: "Renamed".to_string(),
                    price: 42.0,
                    weight: 7.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(returned, id);
    }

    #[tokio::test]
    async fn update_unknown_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::new_v4();

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(
                id,
                ProductDto {
                    name: "Renamed".to_string(),
                    price: 42.0,
                    weight: 7.0,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn product_to_pdf_writes_a_file() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::new_v4();
        let existing = stored_product(id);

        mock_repo
            .expect_find_by_id()
            .with(eq(id))
            .return_once(move |_| Ok(Some(existing)));

        let dir = tempfile::tempdir().unwrap();
        let service = ProductService::with_pdf_output_dir(mock_repo, dir.path());

        let path = service.product_to_pdf(id).await.unwrap();

        assert!(path.starts_with(dir.path()));
        let file_name = path.file_name().unwrap().to_str().unwrap();
        assert!(file_name.starts_with("InfoProductDto_"));
        assert!(file_name.ends_with(".pdf"));
    }
}
