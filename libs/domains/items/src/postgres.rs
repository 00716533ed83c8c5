use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{CreateItem, Item},
    repository::ItemRepository,
};

/// Postgres-backed repository.
///
/// Uniqueness comes from the `items.name` unique constraint. `create` issues a
/// single INSERT and turns a constraint violation into `DuplicateName`, so
/// concurrent creates cannot both succeed.
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: DbErr, name: String) -> ItemError {
    classify_insert_error(err.sql_err(), err, name)
}

/// `kind` is what the driver reported for `err`; only a unique violation
/// means the name is taken.
fn classify_insert_error(kind: Option<SqlErr>, err: DbErr, name: String) -> ItemError {
    match kind {
        Some(SqlErr::UniqueConstraintViolation(_)) => ItemError::DuplicateName(name),
        _ => ItemError::Storage(err),
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let name = input.name.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, name))?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn exists_by_name(&self, name: &str) -> ItemResult<bool> {
        let found = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(found.is_some())
    }

    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }
}
