//! PostgreSQL adapter for InventoryRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait};

use crate::domain::entities::Inventory;
use crate::domain::ports::InventoryRepository;
use crate::entity::inventory_items;
use crate::error::DomainError;

/// PostgreSQL implementation of InventoryRepository
///
/// The inventory is the whole `inventory_items` table, one row per ingredient.
pub struct PostgresInventoryRepository {
    db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoryRepository for PostgresInventoryRepository {
    async fn load(&self) -> Result<Inventory, DomainError> {
        let rows = inventory_items::Entity::find()
            .order_by_asc(inventory_items::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let quantities: BTreeMap<String, i32> =
            rows.into_iter().map(|row| (row.name, row.amount)).collect();

        Inventory::from_quantities(quantities)
    }

    async fn save(&self, inventory: &Inventory) -> Result<(), DomainError> {
        let now = Utc::now().fixed_offset();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        for (name, amount) in inventory.quantities() {
            let model = inventory_items::ActiveModel {
                name: Set(name.clone()),
                amount: Set(*amount),
                updated_at: Set(now),
            };

            inventory_items::Entity::insert(model)
                .on_conflict(
                    OnConflict::column(inventory_items::Column::Name)
                        .update_columns([
                            inventory_items::Column::Amount,
                            inventory_items::Column::UpdatedAt,
                        ])
                        .to_owned(),
                )
                .exec(&txn)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!(items = inventory.quantities().len(), "Inventory saved");
        Ok(())
    }
}
