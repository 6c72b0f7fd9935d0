use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::patch::Patch;

/// Store-assigned item identifier
pub type ItemId = i64;

pub const DESCRIPTION_MAX_LEN: u64 = 10_000;

/// Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned by the store
    pub id: ItemId,
    pub name: String,
    /// `null` is distinct from an empty string
    pub description: Option<String>,
    /// Labels in insertion order
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` until the first update
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a fresh item with `created_at == updated_at == now`.
    pub fn new(id: ItemId, input: CreateItem, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            tags: input.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields and stamp `updated_at`, even when nothing else changed.
    pub fn apply_update(&mut self, update: UpdateItem, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        update.description.apply_to(&mut self.description);
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = now;
    }
}

/// DTO for creating a new item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub tags: Vec<String>,
}

impl CreateItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// DTO for updating an existing item
///
/// Absent fields are left unchanged. `description: null` clears the
/// description; `tags: []` clears the tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unchanged")]
    #[validate(custom(function = "validate_description_patch"))]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub tags: Option<Vec<String>>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_unchanged() && self.tags.is_none()
    }
}

fn validate_description_patch(description: &Patch<String>) -> Result<(), ValidationError> {
    match description.as_ref() {
        Patch::Set(text) if text.chars().count() as u64 > DESCRIPTION_MAX_LEN => {
            let mut err = ValidationError::new("length");
            err.add_param("max".into(), &DESCRIPTION_MAX_LEN);
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Query parameters for listing items
///
/// All filters combine with AND; an omitted filter imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ItemFilter {
    /// Case-insensitive substring of the name
    pub q: Option<String>,
    /// Only items created strictly after this instant
    pub created_after: Option<DateTime<Utc>>,
    /// Only items created strictly before this instant
    pub created_before: Option<DateTime<Utc>>,
    /// Exact tag the item must carry
    pub tag: Option<String>,
    /// Page size, clamped to 1..=100 (default 20)
    #[serde(default, deserialize_with = "saturating::deserialize")]
    pub limit: Option<i64>,
    /// Items to skip, negative values count as 0 (default 0)
    #[serde(default, deserialize_with = "saturating::deserialize")]
    pub offset: Option<i64>,
}

/// Integers outside `i64` saturate instead of failing, so out-of-range
/// `limit`/`offset` values still clamp.
mod saturating {
    use serde::Deserializer;
    use serde::de::{self, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalInt)
    }

    struct OptionalInt;

    impl<'de> Visitor<'de> for OptionalInt {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(Int).map(Some)
        }
    }

    struct Int;

    impl<'de> Visitor<'de> for Int {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            parse_saturating(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    /// `[+-]digits`, saturating at the `i64` bounds
    pub(super) fn parse_saturating(raw: &str) -> Option<i64> {
        let (negative, digits) = match raw.as_bytes().first()? {
            b'-' => (true, &raw[1..]),
            b'+' => (false, &raw[1..]),
            _ => (false, raw),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(match raw.parse::<i64>() {
            Ok(v) => v,
            Err(_) if negative => i64::MIN,
            Err(_) => i64::MAX,
        })
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemPage {
    /// Matches before pagination
    pub total: u64,
    pub items: Vec<Item>,
}
