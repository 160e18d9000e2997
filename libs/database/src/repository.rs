//! Generic repository over uuid-keyed SeaORM entities.
//!
//! Domain repositories wrap a [`BaseRepository`] for the single-statement
//! operations and fall back to `Entity::find()` on [`BaseRepository::db`]
//! for anything richer.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use std::marker::PhantomData;
use uuid::Uuid;

use crate::common::DatabaseResult;

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// Deletes the row with the given id, returning the affected-row count.
    pub async fn delete_by_id(&self, id: Uuid) -> DatabaseResult<u64> {
        Ok(E::delete_by_id(id).exec(&self.db).await?.rows_affected)
    }

    pub async fn insert<A>(&self, model: A) -> DatabaseResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update<A>(&self, model: A) -> DatabaseResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.db).await?)
    }
}
