use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List products for one page, ordered by creation timestamp
    async fn find_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Persist a new product
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Persist changes to an existing product
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Delete a product by ID; not-found when nothing was removed
    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn find_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by(|a, b| a.created.cmp(&b.created));

        let result = result
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit() as usize)
            .collect();

        Ok(result)
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductDto;

    fn sample(name: &str) -> Product {
        Product::new(ProductDto {
            name: name.to_string(),
            price: 100.0,
            weight: 50.0,
        })
    }

    #[tokio::test]
    async fn save_and_find_product() {
        let repo = InMemoryProductRepository::new();

        let saved = repo.save(sample("lamp")).await.unwrap();
        let fetched = repo.find_by_id(saved.id).await.unwrap();

        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().name, "lamp");
    }

    #[tokio::test]
    async fn delete_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_product() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(sample("chair")).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_paginates() {
        let repo = InMemoryProductRepository::new();
        for i in 0..5 {
            repo.save(sample(&format!("product-{i}"))).await.unwrap();
        }

        let page = repo
            .find_all(ProductFilter {
                page_size: 2,
                page_number: 3,
            })
            .await
            .unwrap();

        assert_eq!(page.len(), 1);

        let empty = repo
            .find_all(ProductFilter {
                page_size: 2,
                page_number: 4,
            })
            .await
            .unwrap();

        assert!(empty.is_empty());
    }
}
