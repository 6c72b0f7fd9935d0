//! Gateway behaviour shared by every store adapter.
//!
//! Each scenario takes a fresh, empty gateway.

use domain_items::seed::sample_items;
use domain_items::*;
use std::sync::Arc;
use std::time::Duration;
use test_utils::TestDataBuilder;
use test_utils::assertions::{assert_same_order, assert_some};

/// Long enough for two stores' clocks to tick apart
const TICK: Duration = Duration::from_millis(5);

fn names(page: &ItemPage) -> Vec<&str> {
    page.items.iter().map(|i| i.name.as_str()).collect()
}

fn filter() -> ItemFilter {
    ItemFilter::default()
}

async fn seed(gateway: &Arc<dyn DataGateway>) -> Vec<Item> {
    let mut items = Vec::new();
    for input in sample_items() {
        items.push(gateway.insert_item(input).await.unwrap());
        tokio::time::sleep(TICK).await;
    }
    items
}

pub async fn test_insert_assigns_defaults(gateway: Arc<dyn DataGateway>) {
    let builder = TestDataBuilder::from_test_name("insert_defaults");
    let name = builder.name("item", "bare");

    let first = gateway.insert_item(CreateItem::new(&name)).await.unwrap();
    let second = gateway.insert_item(CreateItem::new("other")).await.unwrap();

    assert_eq!(first.name, name);
    assert_eq!(first.description, None);
    assert!(first.tags.is_empty());
    assert_eq!(first.created_at, first.updated_at);
    assert_ne!(first.id, second.id);

    let fetched = assert_some(gateway.get_item_by_id(first.id).await.unwrap(), "inserted item");
    assert_eq!(fetched, first);
}

pub async fn test_tags_round_trip_in_order(gateway: Arc<dyn DataGateway>) {
    let tags = vec!["zeta", "alpha", "mid", "alpha"];
    let item = gateway
        .insert_item(CreateItem::new("tagged").with_description("").with_tags(tags.clone()))
        .await
        .unwrap();

    let fetched = assert_some(gateway.get_item_by_id(item.id).await.unwrap(), "tagged item");
    assert_eq!(fetched.tags, tags);
    // Empty string stays distinct from null
    assert_eq!(fetched.description.as_deref(), Some(""));
}

pub async fn test_unknown_ids_are_not_errors(gateway: Arc<dyn DataGateway>) {
    assert!(gateway.get_item_by_id(9_999).await.unwrap().is_none());
    assert!(!gateway.delete_item(9_999).await.unwrap());
    assert!(
        gateway
            .update_item(9_999, UpdateItem::default())
            .await
            .unwrap()
            .is_none()
    );
}

pub async fn test_second_delete_returns_false(gateway: Arc<dyn DataGateway>) {
    let item = gateway.insert_item(CreateItem::new("doomed")).await.unwrap();

    assert!(gateway.delete_item(item.id).await.unwrap());
    assert!(!gateway.delete_item(item.id).await.unwrap());
    assert!(gateway.get_item_by_id(item.id).await.unwrap().is_none());
}

pub async fn test_partial_update_changes_only_provided_field(gateway: Arc<dyn DataGateway>) {
    let item = gateway
        .insert_item(CreateItem::new("before").with_description("keep me").with_tags(["a"]))
        .await
        .unwrap();
    tokio::time::sleep(TICK).await;

    let updated = gateway
        .update_item(
            item.id,
            UpdateItem {
                name: Some("after".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "after");
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert_eq!(updated.tags, vec!["a"]);
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at > item.updated_at);

    let fetched = assert_some(gateway.get_item_by_id(item.id).await.unwrap(), "updated item");
    assert_eq!(fetched, updated);
}

pub async fn test_description_tri_state(gateway: Arc<dyn DataGateway>) {
    let item = gateway
        .insert_item(
            CreateItem::new("described")
                .with_description("text")
                .with_tags(["a", "b"]),
        )
        .await
        .unwrap();
    tokio::time::sleep(TICK).await;

    let described = gateway
        .update_item(
            item.id,
            UpdateItem {
                description: Patch::Set("x".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(described.description.as_deref(), Some("x"));
    assert_eq!(described.name, "described");
    assert_eq!(described.tags, vec!["a", "b"]);
    assert_eq!(described.created_at, item.created_at);
    assert!(described.updated_at > item.updated_at);
    tokio::time::sleep(TICK).await;

    let untouched = gateway
        .update_item(item.id, UpdateItem::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.description.as_deref(), Some("x"));
    assert_eq!(untouched.tags, vec!["a", "b"]);
    assert!(untouched.updated_at > described.updated_at);

    let cleared = gateway
        .update_item(
            item.id,
            UpdateItem {
                description: Patch::Clear,
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.description, None);
    assert_eq!(cleared.name, "described");
    assert_eq!(cleared.tags, vec!["a", "b"]);

    let set = gateway
        .update_item(
            item.id,
            UpdateItem {
                description: Patch::Set("new".into()),
                tags: Some(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(set.description.as_deref(), Some("new"));
    assert!(set.tags.is_empty());
}

pub async fn test_limit_is_clamped(gateway: Arc<dyn DataGateway>) {
    for i in 0..105 {
        gateway
            .insert_item(CreateItem::new(format!("bulk-{}", i)))
            .await
            .unwrap();
    }

    let huge = gateway
        .list_items(ItemFilter {
            limit: Some(1000),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(huge.total, 105);
    assert_eq!(huge.items.len(), MAX_LIMIT as usize);

    let zero = gateway
        .list_items(ItemFilter {
            limit: Some(0),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(zero.items.len(), 1);

    let default = gateway.list_items(filter()).await.unwrap();
    assert_eq!(default.items.len(), DEFAULT_LIMIT as usize);

    let negative_offset = gateway
        .list_items(ItemFilter {
            offset: Some(-10),
            limit: Some(1),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(negative_offset.items, zero.items);
}

pub async fn test_seed_filters(gateway: Arc<dyn DataGateway>) {
    let seeded = seed(&gateway).await;

    let demo = gateway
        .list_items(ItemFilter {
            tag: Some("demo".into()),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(demo.total, 2);
    assert_same_order(&names(&demo), &["Sample Item 2", "Sample Item 1"], "tag=demo");

    let sample_demo = gateway
        .list_items(ItemFilter {
            q: Some("sample".into()),
            tag: Some("demo".into()),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(sample_demo.total, 2);
    assert_eq!(sample_demo.items, demo.items);

    let other = gateway
        .list_items(ItemFilter {
            tag: Some("other".into()),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(other.total, 1);
    assert_eq!(other.items[0].id, seeded[2].id);

    let partial_tag = gateway
        .list_items(ItemFilter {
            tag: Some("dem".into()),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(partial_tag.total, 0);
}

pub async fn test_q_matches_literally(gateway: Arc<dyn DataGateway>) {
    gateway.insert_item(CreateItem::new("50% off")).await.unwrap();
    gateway.insert_item(CreateItem::new("500 off")).await.unwrap();
    gateway.insert_item(CreateItem::new("snake_case")).await.unwrap();
    gateway.insert_item(CreateItem::new("snakeXcase")).await.unwrap();

    let percent = gateway
        .list_items(ItemFilter {
            q: Some("0%".into()),
            ..filter()
        })
        .await
        .unwrap();
    assert_same_order(&names(&percent), &["50% off"], "q=0%");

    let underscore = gateway
        .list_items(ItemFilter {
            q: Some("E_C".into()),
            ..filter()
        })
        .await
        .unwrap();
    assert_same_order(&names(&underscore), &["snake_case"], "q=E_C");
}

pub async fn test_newest_first(gateway: Arc<dyn DataGateway>) {
    for name in ["A", "B", "C"] {
        gateway.insert_item(CreateItem::new(name)).await.unwrap();
        tokio::time::sleep(TICK).await;
    }

    let page = gateway.list_items(filter()).await.unwrap();
    assert_same_order(&names(&page), &["C", "B", "A"], "creation order");
}

pub async fn test_pagination_window(gateway: Arc<dyn DataGateway>) {
    for i in 1..=5 {
        gateway
            .insert_item(CreateItem::new(format!("rank-{}", 6 - i)))
            .await
            .unwrap();
        tokio::time::sleep(TICK).await;
    }

    let page = gateway
        .list_items(ItemFilter {
            limit: Some(2),
            offset: Some(2),
            ..filter()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 5);
    assert_same_order(&names(&page), &["rank-3", "rank-4"], "limit 2 offset 2");

    let past_end = gateway
        .list_items(ItemFilter {
            offset: Some(10),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(past_end.total, 5);
    assert!(past_end.items.is_empty());
}

pub async fn test_created_bounds_are_exclusive(gateway: Arc<dyn DataGateway>) {
    let seeded = seed(&gateway).await;
    let (first, middle, last) = (&seeded[0], &seeded[1], &seeded[2]);

    let after_first = gateway
        .list_items(ItemFilter {
            created_after: Some(first.created_at),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(after_first.total, 2);

    let window = gateway
        .list_items(ItemFilter {
            created_after: Some(first.created_at),
            created_before: Some(last.created_at),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(window.total, 1);
    assert_eq!(window.items[0].id, middle.id);

    let inverted = gateway
        .list_items(ItemFilter {
            created_after: Some(last.created_at),
            created_before: Some(first.created_at),
            ..filter()
        })
        .await
        .unwrap();
    assert_eq!(inverted.total, 0);
    assert!(inverted.items.is_empty());
}
