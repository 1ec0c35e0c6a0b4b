//! Ability ordering and score arithmetic.
//!
//! The whole system is built on a fixed six-ability ordering (strength,
//! dexterity, constitution, intelligence, wisdom, charisma): class
//! ability defaults, race ability bonuses, and the character's ability
//! point slots are all positional lists aligned to this order. This
//! module provides the `AbilityKey` index type for that ordering, the
//! `ScoreValue` unset-or-number sentinel, the standard array of
//! assignable scores, and the modifier formula.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The fixed pool of ability scores a character draws from.
///
/// Each value may be assigned to at most one of the six ability slots;
/// [`crate::CharacterSession::point_options`] enforces this when
/// computing what a slot may still be set to.
pub const STANDARD_ARRAY: [i32; 6] = [8, 10, 12, 13, 14, 15];

/// Index into the fixed six-ability ordering.
///
/// # Examples
///
/// ```rust
/// use chargen::AbilityKey;
///
/// assert_eq!(AbilityKey::Strength.index(), 0);
/// assert_eq!(AbilityKey::Charisma.index(), 5);
/// assert_eq!(AbilityKey::from_name("wisdom"), Some(AbilityKey::Wisdom));
/// assert_eq!(AbilityKey::ALL.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AbilityKey {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl AbilityKey {
    /// All six keys in slot order.
    pub const ALL: [AbilityKey; 6] = [
        AbilityKey::Strength,
        AbilityKey::Dexterity,
        AbilityKey::Constitution,
        AbilityKey::Intelligence,
        AbilityKey::Wisdom,
        AbilityKey::Charisma,
    ];

    /// The slot index of this key (0..6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The key for a slot index, if `index < 6`.
    pub fn from_index(index: usize) -> Option<AbilityKey> {
        Self::ALL.get(index).copied()
    }

    /// The lowercase ability name, as the original dataset spells it.
    pub fn name(self) -> &'static str {
        match self {
            AbilityKey::Strength => "strength",
            AbilityKey::Dexterity => "dexterity",
            AbilityKey::Constitution => "constitution",
            AbilityKey::Intelligence => "intelligence",
            AbilityKey::Wisdom => "wisdom",
            AbilityKey::Charisma => "charisma",
        }
    }

    /// Look up a key by its lowercase name.
    pub fn from_name(name: &str) -> Option<AbilityKey> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An ability point slot value: either the unset sentinel or a score.
///
/// On the wire this is the original's `"--"` string for unset and a
/// plain number otherwise.
///
/// # Examples
///
/// ```rust
/// use chargen::ScoreValue;
///
/// let unset: ScoreValue = serde_json::from_str("\"--\"").unwrap();
/// assert_eq!(unset, ScoreValue::Unset);
///
/// let set: ScoreValue = serde_json::from_str("14").unwrap();
/// assert_eq!(set, ScoreValue::Set(14));
/// assert_eq!(serde_json::to_string(&set).unwrap(), "14");
/// assert_eq!(serde_json::to_string(&unset).unwrap(), "\"--\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreValue {
    /// No score assigned yet (`"--"`).
    #[default]
    Unset,
    /// An assigned score.
    Set(i32),
}

impl ScoreValue {
    /// The numeric value, or `None` for the unset sentinel.
    pub fn value(self) -> Option<i32> {
        match self {
            ScoreValue::Unset => None,
            ScoreValue::Set(v) => Some(v),
        }
    }

    /// True if this slot holds a score.
    pub fn is_set(self) -> bool {
        matches!(self, ScoreValue::Set(_))
    }
}

impl std::fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreValue::Unset => f.write_str("--"),
            ScoreValue::Set(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for ScoreValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScoreValue::Unset => serializer.serialize_str("--"),
            ScoreValue::Set(v) => serializer.serialize_i32(*v),
        }
    }
}

impl<'de> Deserialize<'de> for ScoreValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(ScoreValue::Set(v)),
            Repr::Text(s) if s == "--" => Ok(ScoreValue::Unset),
            Repr::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a score or \"--\", got \"{s}\""
            ))),
        }
    }
}

/// The modifier for an adjusted ability score.
///
/// Floor-toward-negative-infinity division, so odd scores below 10
/// round down rather than toward zero.
///
/// # Examples
///
/// ```rust
/// use chargen::ability::score_modifier;
///
/// assert_eq!(score_modifier(10), 0);
/// assert_eq!(score_modifier(8), -1);
/// assert_eq!(score_modifier(9), -1);
/// assert_eq!(score_modifier(15), 2);
/// ```
pub fn score_modifier(adjusted: i32) -> i32 {
    (adjusted - 10).div_euclid(2)
}
