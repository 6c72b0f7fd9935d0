use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::ItemResult;
use crate::gateway::DataGateway;
use crate::listing::ListQuery;
use crate::models::{CreateItem, Item, ItemFilter, ItemId, ItemPage, UpdateItem};

#[derive(Debug, Default)]
struct Store {
    items: HashMap<ItemId, Item>,
    last_id: ItemId,
}

/// In-memory implementation of DataGateway (for development/testing)
///
/// Ids start at 1 and are never reused. Writers are serialised by the lock.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDataGateway {
    store: Arc<RwLock<Store>>,
}

impl InMemoryDataGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DataGateway for InMemoryDataGateway {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn insert_item(&self, input: CreateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let item = Item::new(store.last_id, input, Utc::now());
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_item_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    #[instrument(skip(self, input))]
    async fn update_item(&self, id: ItemId, input: UpdateItem) -> ItemResult<Option<Item>> {
        let mut store = self.store.write().await;

        let Some(item) = store.items.get_mut(&id) else {
            return Ok(None);
        };
        item.apply_update(input, Utc::now());

        tracing::info!(item_id = id, "Updated item");
        Ok(Some(item.clone()))
    }

    #[instrument(skip(self))]
    async fn delete_item(&self, id: ItemId) -> ItemResult<bool> {
        let mut store = self.store.write().await;

        if store.items.remove(&id).is_some() {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[instrument(skip(self))]
    async fn list_items(&self, filter: ItemFilter) -> ItemResult<ItemPage> {
        let query = ListQuery::from(filter);
        let store = self.store.read().await;
        Ok(query.paginate(store.items.values().cloned()))
    }
}
