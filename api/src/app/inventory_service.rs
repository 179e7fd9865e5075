//! Inventory service
//!
//! Owns the machine's single inventory. Every read-modify-write goes through
//! one async mutex so a check and the deduction that follows it cannot
//! interleave with another request.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::{Inventory, Recipe, WELL_KNOWN_INGREDIENTS};
use crate::domain::ports::InventoryRepository;
use crate::error::{AppError, DomainError};

/// Service for the machine inventory
pub struct InventoryService<VR>
where
    VR: InventoryRepository + ?Sized,
{
    inventory: Arc<VR>,
    lock: Mutex<()>,
}

impl<VR> InventoryService<VR>
where
    VR: InventoryRepository + ?Sized,
{
    pub fn new(inventory: Arc<VR>) -> Self {
        Self {
            inventory,
            lock: Mutex::new(()),
        }
    }

    /// Make sure the well-known ingredients are stocked.
    ///
    /// Any of them missing from the store is added with `initial_stock`;
    /// existing amounts are never touched.
    pub async fn initialize(&self, initial_stock: i32) -> Result<Inventory, AppError> {
        let _guard = self.lock.lock().await;
        let mut inventory = self.inventory.load().await?;

        let missing: Vec<&str> = WELL_KNOWN_INGREDIENTS
            .into_iter()
            .filter(|name| inventory.amount_of(name).is_none())
            .collect();

        if missing.is_empty() {
            return Ok(inventory);
        }

        for name in &missing {
            inventory.put_ingredient(name, initial_stock)?;
        }
        self.inventory.save(&inventory).await?;

        tracing::info!(
            seeded = ?missing,
            initial_stock = initial_stock,
            "Inventory initialized"
        );
        Ok(inventory)
    }

    /// Current inventory
    pub async fn get(&self) -> Result<Inventory, AppError> {
        Ok(self.inventory.load().await?)
    }

    /// Additive restock of the well-known ingredients
    pub async fn restock(
        &self,
        coffee: i32,
        milk: i32,
        sugar: i32,
        chocolate: i32,
    ) -> Result<Inventory, AppError> {
        let _guard = self.lock.lock().await;
        let mut inventory = self.inventory.load().await?;

        inventory.add_ingredients(coffee, milk, sugar, chocolate)?;
        self.inventory.save(&inventory).await?;

        tracing::info!(
            coffee = coffee,
            milk = milk,
            sugar = sugar,
            chocolate = chocolate,
            "Inventory restocked"
        );
        Ok(inventory)
    }

    /// Set the amount of one ingredient, adding it if it is not stocked yet
    pub async fn put_ingredient(&self, name: &str, amount: i32) -> Result<Inventory, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "Ingredient name is required".to_string(),
            )));
        }

        let _guard = self.lock.lock().await;
        let mut inventory = self.inventory.load().await?;

        inventory.put_ingredient(name, amount)?;
        self.inventory.save(&inventory).await?;

        tracing::info!(ingredient = %name, amount = amount, "Inventory amount set");
        Ok(inventory)
    }

    /// Deduct the recipe's ingredients if all of them are on hand.
    ///
    /// Returns false, and persists nothing, when the inventory is short.
    pub async fn consume(&self, recipe: &Recipe) -> Result<bool, AppError> {
        let _guard = self.lock.lock().await;
        let mut inventory = self.inventory.load().await?;

        if !inventory.use_ingredients(recipe) {
            tracing::debug!(
                recipe = recipe.name().unwrap_or_default(),
                "Not enough inventory"
            );
            return Ok(false);
        }

        self.inventory.save(&inventory).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CHOCOLATE, COFFEE, MILK, SUGAR};
    use crate::test_utils::{test_coffee, test_inventory, InMemoryInventoryRepository};

    fn create_service(
        repo: InMemoryInventoryRepository,
    ) -> (
        Arc<InMemoryInventoryRepository>,
        InventoryService<InMemoryInventoryRepository>,
    ) {
        let repo = Arc::new(repo);
        (repo.clone(), InventoryService::new(repo))
    }

    #[tokio::test]
    async fn initialize_seeds_empty_store() {
        let (repo, service) = create_service(InMemoryInventoryRepository::new());

        let inventory = service.initialize(15).await.unwrap();

        for name in WELL_KNOWN_INGREDIENTS {
            assert_eq!(inventory.get_amount(name), 15);
        }
        assert_eq!(repo.snapshot(), inventory);
    }

    #[tokio::test]
    async fn initialize_keeps_existing_amounts() {
        let (repo, service) =
            create_service(InMemoryInventoryRepository::new().with_inventory(test_inventory(3)));

        let inventory = service.initialize(100).await.unwrap();

        assert_eq!(inventory.get_amount(COFFEE), 3);
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn restock_adds_and_persists() {
        let (repo, service) =
            create_service(InMemoryInventoryRepository::new().with_inventory(test_inventory(500)));

        service.restock(5, 3, 7, 2).await.unwrap();

        let stored = repo.snapshot();
        assert_eq!(stored.get_amount(COFFEE), 505);
        assert_eq!(stored.get_amount(MILK), 503);
        assert_eq!(stored.get_amount(SUGAR), 507);
        assert_eq!(stored.get_amount(CHOCOLATE), 502);
    }

    #[tokio::test]
    async fn restock_with_negative_persists_nothing() {
        let (repo, service) =
            create_service(InMemoryInventoryRepository::new().with_inventory(test_inventory(500)));

        let result = service.restock(5, 3, -7, 2).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::InvalidAmount(_)))
        ));
        assert_eq!(repo.snapshot(), test_inventory(500));
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn put_ingredient_overwrites() {
        let (repo, service) =
            create_service(InMemoryInventoryRepository::new().with_inventory(test_inventory(15)));

        service.put_ingredient(COFFEE, 0).await.unwrap();
        service.put_ingredient("Caramel", 9).await.unwrap();

        let stored = repo.snapshot();
        assert_eq!(stored.get_amount(COFFEE), 0);
        assert_eq!(stored.get_amount("Caramel"), 9);
    }

    #[tokio::test]
    async fn put_ingredient_rejects_negative_and_blank_name() {
        let (repo, service) =
            create_service(InMemoryInventoryRepository::new().with_inventory(test_inventory(15)));

        assert!(service.put_ingredient(COFFEE, -1).await.is_err());
        assert!(service.put_ingredient("  ", 1).await.is_err());
        assert_eq!(repo.save_count(), 0);
    }

    #[tokio::test]
    async fn consume_only_saves_on_success() {
        let (repo, service) =
            create_service(InMemoryInventoryRepository::new().with_inventory(test_inventory(3)));

        assert!(service.consume(&test_coffee()).await.unwrap());
        assert_eq!(repo.snapshot().get_amount(COFFEE), 0);
        assert_eq!(repo.save_count(), 1);

        assert!(!service.consume(&test_coffee()).await.unwrap());
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_consumers_never_overdraw() {
        let (repo, service) =
            create_service(InMemoryInventoryRepository::new().with_inventory(test_inventory(10)));
        let service = Arc::new(service);

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.consume(&test_coffee()).await.unwrap() })
            })
            .collect();

        let mut made = 0;
        for handle in handles {
            if handle.await.unwrap() {
                made += 1;
            }
        }

        assert_eq!(made, 3);
        assert_eq!(repo.snapshot().get_amount(COFFEE), 1);
    }
}
