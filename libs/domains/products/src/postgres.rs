use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductFilter},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| ProductError::Store(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn find_all(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreationDate)
            .limit(filter.limit())
            .offset(filter.offset())
            .all(self.base.db())
            .await
            .map_err(|e| ProductError::Store(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| ProductError::Store(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        let model = self
            .base
            .update(active_model)
            .await
            .map_err(|e| ProductError::Store(format!("Database error: {}", e)))?;

        tracing::info!(product_id = %model.id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| ProductError::Store(format!("Database error: {}", e)))?;

        if rows_affected == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}
