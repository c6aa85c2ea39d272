//! Typed identifiers for the entities the portal backend hands out.
//!
//! The backend generates every id, so the client never mints one. The marker
//! type keeps a member id from being passed where a qualification id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper around a backend-issued string id.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just the string, matching the backend's JSON
impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Id<T> {
    /// Wraps a backend-issued id.
    ///
    /// # Example
    /// ```
    /// use portal::id::MemberId;
    ///
    /// let id = MemberId::from_string("4f1c".to_string());
    /// assert_eq!(id.as_str(), "4f1c");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The backend uses `""` to mean "no id", e.g. an unassigned supervisor.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Type markers for the backend's entity kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualificationMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequirementMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReferenceMarker;

pub type MemberId = Id<MemberMarker>;

pub type QualificationId = Id<QualificationMarker>;

pub type RequirementId = Id<RequirementMarker>;

pub type ReferenceId = Id<ReferenceMarker>;

/// Deserializes an optional id where the backend may send `""` for "none".
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<Id<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()).map(Id::from_string))
}
