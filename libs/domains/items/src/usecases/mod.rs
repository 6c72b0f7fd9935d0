//! One use case per gateway operation.
//!
//! Each wraps exactly one [`DataGateway`] call and returns its result
//! unchanged. Input validation happens at the transport boundary.

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::CreateItemUseCase;
pub use delete::DeleteItemUseCase;
pub use get::GetItemUseCase;
pub use list::ListItemsUseCase;
pub use update::UpdateItemUseCase;

use std::sync::Arc;

use crate::gateway::DataGateway;

/// The five item use cases, sharing one gateway.
#[derive(Clone)]
pub struct ItemUseCases {
    pub create: CreateItemUseCase,
    pub get: GetItemUseCase,
    pub update: UpdateItemUseCase,
    pub delete: DeleteItemUseCase,
    pub list: ListItemsUseCase,
}

impl ItemUseCases {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self {
            create: CreateItemUseCase::new(gateway.clone()),
            get: GetItemUseCase::new(gateway.clone()),
            update: UpdateItemUseCase::new(gateway.clone()),
            delete: DeleteItemUseCase::new(gateway.clone()),
            list: ListItemsUseCase::new(gateway),
        }
    }
}
