use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::gateway::DataGateway;
use crate::models::{CreateItem, Item};

#[derive(Clone)]
pub struct CreateItemUseCase {
    gateway: Arc<dyn DataGateway>,
}

impl CreateItemUseCase {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn execute(&self, input: CreateItem) -> ItemResult<Item> {
        self.gateway.insert_item(input).await
    }
}
