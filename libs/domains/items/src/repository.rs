use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item};

/// Repository trait for Item persistence
///
/// `create` must reject a duplicate name atomically: two concurrent calls
/// with the same name yield exactly one stored item and one
/// `ItemError::DuplicateName`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item and return it with its assigned id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Whether an item with exactly this name exists
    async fn exists_by_name(&self, name: &str) -> ItemResult<bool>;

    /// Every stored item. Callers must not rely on the order.
    async fn list_all(&self) -> ItemResult<Vec<Item>>;
}

#[derive(Debug, Default)]
struct Store {
    items: Vec<Item>,
    last_id: i64,
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        // Check and insert under one write lock.
        let mut store = self.store.write().await;

        if store.items.iter().any(|i| i.name == input.name) {
            return Err(ItemError::DuplicateName(input.name));
        }

        store.last_id += 1;
        let item = Item {
            id: store.last_id,
            name: input.name,
            description: input.description,
        };
        store.items.push(item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn exists_by_name(&self, name: &str) -> ItemResult<bool> {
        let store = self.store.read().await;
        Ok(store.items.iter().any(|i| i.name == name))
    }

    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.items.clone())
    }
}
