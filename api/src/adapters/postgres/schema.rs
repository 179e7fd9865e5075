//! Schema bootstrap
//!
//! Creates the tables described by the SeaORM entities when they do not
//! exist yet.

use sea_orm::{ConnectionTrait, DatabaseConnection, EntityName, EntityTrait, Schema};

use crate::entity::{ingredients, inventory_items, recipe_ingredients, recipes};
use crate::error::DomainError;

/// Create all tables. Referenced tables come first.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    create_table(db, recipes::Entity).await?;
    create_table(db, recipe_ingredients::Entity).await?;
    create_table(db, ingredients::Entity).await?;
    create_table(db, inventory_items::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let table = entity.table_name().to_string();

    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    tracing::debug!(table = %table, "Table ready");
    Ok(())
}
