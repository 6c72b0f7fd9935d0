//! Items Domain
//!
//! CRUD and filtered listing over a single `Item` resource.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← One per operation, pure delegation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ DataGateway │  ← Store contract (PostgreSQL, in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, inputs, filter, page
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use domain_items::{handlers, InMemoryDataGateway, ItemUseCases};
//!
//! let use_cases = ItemUseCases::new(Arc::new(InMemoryDataGateway::new()));
//! let router = handlers::router(use_cases);
//! ```

pub mod entity;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod listing;
pub mod memory;
pub mod models;
pub mod patch;
pub mod postgres;
pub mod seed;
pub mod usecases;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use gateway::DataGateway;
pub use handlers::ApiDoc;
pub use listing::{DEFAULT_LIMIT, MAX_LIMIT};
pub use memory::InMemoryDataGateway;
pub use models::{CreateItem, Item, ItemFilter, ItemId, ItemPage, UpdateItem};
pub use patch::Patch;
pub use postgres::PgDataGateway;
pub use usecases::{
    CreateItemUseCase, DeleteItemUseCase, GetItemUseCase, ItemUseCases, ListItemsUseCase,
    UpdateItemUseCase,
};
