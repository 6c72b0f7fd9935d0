//! Sample data for local development and demos.

use tracing::info;

use crate::error::ItemResult;
use crate::models::{CreateItem, ItemFilter};
use crate::usecases::ItemUseCases;

/// The three demo items, in insertion order.
pub fn sample_items() -> Vec<CreateItem> {
    vec![
        CreateItem::new("Sample Item 1")
            .with_description("First seed item")
            .with_tags(["demo", "test"]),
        CreateItem::new("Sample Item 2")
            .with_description("Second seed item")
            .with_tags(["demo"]),
        CreateItem::new("Another Thing").with_tags(["other"]),
    ]
}

/// Insert [`sample_items`] when the store is empty.
///
/// Returns how many items were inserted, so a restart against a populated
/// store is a no-op.
pub async fn seed_sample_items(use_cases: &ItemUseCases) -> ItemResult<usize> {
    let existing = use_cases
        .list
        .execute(ItemFilter {
            limit: Some(1),
            ..Default::default()
        })
        .await?;

    if existing.total > 0 {
        info!(existing = existing.total, "Store already populated, skipping seed");
        return Ok(0);
    }

    let items = sample_items();
    let count = items.len();
    for input in items {
        use_cases.create.execute(input).await?;
    }

    info!(count, "Seeded sample items");
    Ok(count)
}
