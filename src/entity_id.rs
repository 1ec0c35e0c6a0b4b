//! Entity identifier module.
//!
//! Provides the `EntityId` type, an interned string identifier for
//! dataset entities. Uses `Arc<str>` for cheap cloning and fast
//! comparison; the shipped datasets use uuid strings, but ids are
//! treated as opaque and never parsed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for dataset entities.
///
/// Uses `Arc<str>` so that the many embedded copies produced by
/// denormalisation share one allocation per distinct id.
///
/// # Examples
///
/// ```rust
/// use chargen::EntityId;
///
/// let fireball = EntityId::new("spell-fireball");
///
/// // Can be created from string slices or owned strings
/// let fireball2: EntityId = "spell-fireball".into();
/// let fireball3: EntityId = String::from("spell-fireball").into();
///
/// assert_eq!(fireball, fireball2);
/// assert_eq!(fireball, fireball3);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntityId(Arc<str>);

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(EntityId::from(s))
    }
}

impl EntityId {
    /// Create a new `EntityId` from a string slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chargen::EntityId;
    ///
    /// let id = EntityId::new("race-dwarf");
    /// assert_eq!(id.as_str(), "race-dwarf");
    /// ```
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the string representation of this `EntityId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
