//! Tri-state field for partial updates of nullable columns.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A nullable field in an update payload.
///
/// | JSON              | Value        |
/// |-------------------|--------------|
/// | key absent        | `Unchanged`  |
/// | `"key": null`     | `Clear`      |
/// | `"key": "value"`  | `Set(value)` |
///
/// Fields of this type need `#[serde(default)]` so an absent key maps to
/// `Unchanged`, and `skip_serializing_if = "Patch::is_unchanged"` so it
/// round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    /// `None` when unchanged, otherwise the new column value.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Patch::Unchanged => None,
            Patch::Clear => Some(None),
            Patch::Set(value) => Some(Some(value)),
        }
    }

    /// Write the change, if any, into `target`.
    pub fn apply_to(self, target: &mut Option<T>) {
        if let Some(value) = self.into_change() {
            *target = value;
        }
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Unchanged => Patch::Unchanged,
            Patch::Clear => Patch::Clear,
            Patch::Set(value) => Patch::Set(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => serializer.serialize_some(value),
            Patch::Unchanged | Patch::Clear => serializer.serialize_none(),
        }
    }
}
