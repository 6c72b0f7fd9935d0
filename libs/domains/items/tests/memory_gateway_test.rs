//! Gateway behaviour against the in-memory adapter.

mod common;

use domain_items::InMemoryDataGateway;
use std::sync::Arc;

macro_rules! in_memory {
    ($($scenario:ident),* $(,)?) => {
        $(
            #[tokio::test]
            async fn $scenario() {
                common::$scenario(Arc::new(InMemoryDataGateway::new())).await;
            }
        )*
    };
}

in_memory!(
    test_insert_assigns_defaults,
    test_tags_round_trip_in_order,
    test_unknown_ids_are_not_errors,
    test_second_delete_returns_false,
    test_partial_update_changes_only_provided_field,
    test_description_tri_state,
    test_limit_is_clamped,
    test_seed_filters,
    test_q_matches_literally,
    test_newest_first,
    test_pagination_window,
    test_created_bounds_are_exclusive,
);
