use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::gateway::DataGateway;
use crate::models::{ItemFilter, ItemPage};

#[derive(Clone)]
pub struct ListItemsUseCase {
    gateway: Arc<dyn DataGateway>,
}

impl ListItemsUseCase {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Clamping and defaults are applied by the gateway, not here.
    #[instrument(skip(self))]
    pub async fn execute(&self, filter: ItemFilter) -> ItemResult<ItemPage> {
        self.gateway.list_items(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockDataGateway;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_forwards_raw_filter() {
        let filter = ItemFilter {
            limit: Some(1000),
            offset: Some(-1),
            ..Default::default()
        };

        let mut gateway = MockDataGateway::new();
        gateway
            .expect_list_items()
            .with(eq(filter.clone()))
            .times(1)
            .returning(|_| {
                Ok(ItemPage {
                    total: 0,
                    items: vec![],
                })
            });

        let use_case = ListItemsUseCase::new(Arc::new(gateway));
        let page = use_case.execute(filter).await.unwrap();
        assert_eq!(page.total, 0);
    }
}
