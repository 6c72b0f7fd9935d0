use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::gateway::DataGateway;
use crate::models::{Item, ItemId, UpdateItem};

#[derive(Clone)]
pub struct UpdateItemUseCase {
    gateway: Arc<dyn DataGateway>,
}

impl UpdateItemUseCase {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// An empty update is forwarded as-is; the gateway still refreshes `updated_at`.
    #[instrument(skip(self, input))]
    pub async fn execute(&self, id: ItemId, input: UpdateItem) -> ItemResult<Option<Item>> {
        self.gateway.update_item(id, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockDataGateway;
    use crate::patch::Patch;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_forwards_tri_state_description() {
        let input = UpdateItem {
            description: Patch::Clear,
            ..Default::default()
        };

        let mut gateway = MockDataGateway::new();
        gateway
            .expect_update_item()
            .with(eq(5), eq(input.clone()))
            .times(1)
            .returning(|_, _| Ok(None));

        let use_case = UpdateItemUseCase::new(Arc::new(gateway));
        assert!(use_case.execute(5, input).await.unwrap().is_none());
    }
}
