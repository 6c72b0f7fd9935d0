use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::gateway::DataGateway;
use crate::models::{Item, ItemId};

#[derive(Clone)]
pub struct GetItemUseCase {
    gateway: Arc<dyn DataGateway>,
}

impl GetItemUseCase {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: ItemId) -> ItemResult<Option<Item>> {
        self.gateway.get_item_by_id(id).await
    }
}
