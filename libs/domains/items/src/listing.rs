//! Listing rules shared by every gateway: filter normalisation, clamping,
//! ordering and pagination.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::models::{Item, ItemFilter, ItemPage};

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Absent → 20, otherwise clamped to `1..=100`.
pub fn clamp_limit(limit: Option<i64>) -> u64 {
    match limit {
        None => DEFAULT_LIMIT,
        Some(limit) => limit.clamp(1, MAX_LIMIT as i64) as u64,
    }
}

/// Absent or negative → 0. No upper bound.
pub fn clamp_offset(offset: Option<i64>) -> u64 {
    offset.map_or(0, |offset| offset.max(0) as u64)
}

/// An [`ItemFilter`] with defaults applied and empty strings dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub q: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub tag: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl From<ItemFilter> for ListQuery {
    fn from(filter: ItemFilter) -> Self {
        Self {
            q: filter.q.filter(|q| !q.is_empty()),
            created_after: filter.created_after,
            created_before: filter.created_before,
            tag: filter.tag.filter(|tag| !tag.is_empty()),
            limit: clamp_limit(filter.limit),
            offset: clamp_offset(filter.offset),
        }
    }
}

impl ListQuery {
    /// Conjunction of every supplied filter
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(q) = &self.q {
            if !item.name.to_lowercase().contains(&q.to_lowercase()) {
                return false;
            }
        }
        if let Some(after) = self.created_after {
            if item.created_at <= after {
                return false;
            }
        }
        if let Some(before) = self.created_before {
            if item.created_at >= before {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !item.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        true
    }

    /// Filter, sort newest first, count, then cut the requested page.
    pub fn paginate<I>(&self, items: I) -> ItemPage
    where
        I: IntoIterator<Item = Item>,
    {
        let mut matched: Vec<Item> = items.into_iter().filter(|i| self.matches(i)).collect();
        matched.sort_by(newest_first);

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(usize::try_from(self.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .collect();

        ItemPage { total, items }
    }
}

/// `created_at` descending, then `id` descending
pub fn newest_first(a: &Item, b: &Item) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateItem;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn item(id: i64, name: &str, tags: &[&str], created: i64) -> Item {
        Item::new(
            id,
            CreateItem::new(name).with_tags(tags.iter().copied()),
            at(created),
        )
    }

    fn query(filter: ItemFilter) -> ListQuery {
        ListQuery::from(filter)
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None), 20);
        assert_eq!(clamp_limit(Some(1000)), 100);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(37)), 37);
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(Some(1_000_000)), 1_000_000);
    }

    #[test]
    fn test_empty_strings_impose_no_constraint() {
        let q = query(ItemFilter {
            q: Some(String::new()),
            tag: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(q.q, None);
        assert_eq!(q.tag, None);
        assert!(q.matches(&item(1, "anything", &[], 0)));
    }

    #[test]
    fn test_q_is_case_insensitive_substring() {
        let q = query(ItemFilter {
            q: Some("SAMple".into()),
            ..Default::default()
        });
        assert!(q.matches(&item(1, "Sample Item 1", &[], 0)));
        assert!(q.matches(&item(2, "a sampled thing", &[], 0)));
        assert!(!q.matches(&item(3, "Another Thing", &[], 0)));
    }

    #[test]
    fn test_time_bounds_are_exclusive() {
        let q = query(ItemFilter {
            created_after: Some(at(10)),
            created_before: Some(at(20)),
            ..Default::default()
        });
        assert!(!q.matches(&item(1, "a", &[], 10)));
        assert!(q.matches(&item(2, "b", &[], 15)));
        assert!(!q.matches(&item(3, "c", &[], 20)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let q = query(ItemFilter {
            created_after: Some(at(20)),
            created_before: Some(at(10)),
            ..Default::default()
        });
        let page = q.paginate((0..30).map(|i| item(i, "x", &[], i)));
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_tag_is_exact_membership() {
        let q = query(ItemFilter {
            tag: Some("demo".into()),
            ..Default::default()
        });
        assert!(q.matches(&item(1, "a", &["test", "demo"], 0)));
        assert!(!q.matches(&item(2, "b", &["demonstration"], 0)));
        assert!(!q.matches(&item(3, "c", &["Demo"], 0)));
    }

    #[test]
    fn test_ties_break_by_id_descending() {
        let page = query(ItemFilter::default()).paginate(vec![
            item(1, "a", &[], 5),
            item(3, "c", &[], 5),
            item(2, "b", &[], 9),
        ]);
        let ids: Vec<_> = page.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_total_counts_before_pagination() {
        let q = query(ItemFilter {
            limit: Some(2),
            offset: Some(2),
            ..Default::default()
        });
        let page = q.paginate((1..=5).map(|i| item(i, "x", &[], i)));

        assert_eq!(page.total, 5);
        let ids: Vec<_> = page.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_offset_past_end_is_empty_page() {
        let q = query(ItemFilter {
            offset: Some(50),
            ..Default::default()
        });
        let page = q.paginate((1..=5).map(|i| item(i, "x", &[], i)));
        assert_eq!(page.total, 5);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_default_page_size() {
        let base = at(0);
        let items = (0..30).map(|i| Item::new(i, CreateItem::new("x"), base + Duration::seconds(i)));
        let page = query(ItemFilter::default()).paginate(items);
        assert_eq!(page.total, 30);
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.items[0].id, 29);
    }
}
