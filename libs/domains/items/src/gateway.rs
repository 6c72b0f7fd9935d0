//! Data access contract for items.

use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemFilter, ItemId, ItemPage, UpdateItem};

/// Everything the use cases need from a store.
///
/// Not-found is never an error here: lookups return `None`, deletes return
/// `false`. Store faults come back as [`ItemError::Database`](crate::ItemError)
/// without translation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataGateway: Send + Sync {
    /// Persist a new item. The store assigns `id`, `created_at` and `updated_at`.
    async fn insert_item(&self, input: CreateItem) -> ItemResult<Item>;

    async fn get_item_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// Merge the provided fields into an existing item and refresh `updated_at`.
    ///
    /// Reads before writing; two concurrent updates of one id may lose one
    /// of the writes.
    async fn update_item(&self, id: ItemId, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// `true` when a row existed and was removed
    async fn delete_item(&self, id: ItemId) -> ItemResult<bool>;

    /// Filter, order newest first, count, then paginate.
    async fn list_items(&self, filter: ItemFilter) -> ItemResult<ItemPage>;
}
