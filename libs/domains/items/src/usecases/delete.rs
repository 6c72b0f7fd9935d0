use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::gateway::DataGateway;
use crate::models::ItemId;

#[derive(Clone)]
pub struct DeleteItemUseCase {
    gateway: Arc<dyn DataGateway>,
}

impl DeleteItemUseCase {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: ItemId) -> ItemResult<bool> {
        self.gateway.delete_item(id).await
    }
}
