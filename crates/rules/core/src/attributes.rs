//! Core attributes and the collections that carry their values.
//!
//! Two collection shapes exist on purpose:
//!
//! - [`AttributeSet`] is total. Every attribute has a value, stored in a
//!   fixed array. This is what a finished character sheet carries.
//! - [`AttributeValues`] is partial. Formula evaluation accepts it so that
//!   callers can supply only the attributes a formula actually scales with,
//!   and a genuinely missing value fails loudly instead of defaulting.

use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Attribute
// ============================================================================

/// The five core attributes every character is built from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    /// Physical power. Drives melee damage and carrying capacity.
    Might,
    /// Agility and precision. Drives initiative and stamina.
    Finesse,
    /// Perception and reasoning. Drives initiative and aether reserves.
    Wits,
    /// Resolve and force of personality. Drives aether and stress recovery.
    Will,
    /// Toughness and endurance. Drives health and soak.
    Sturdiness,
}

impl Attribute {
    /// Number of attribute kinds.
    pub const COUNT: usize = 5;

    /// All attributes in canonical order.
    pub const fn all() -> [Attribute; Self::COUNT] {
        [
            Attribute::Might,
            Attribute::Finesse,
            Attribute::Wits,
            Attribute::Will,
            Attribute::Sturdiness,
        ]
    }

    /// Stable index for array-backed storage.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Short label used in compact displays.
    pub const fn short_label(self) -> &'static str {
        match self {
            Attribute::Might => "M",
            Attribute::Finesse => "F",
            Attribute::Wits => "Wi",
            Attribute::Will => "Wl",
            Attribute::Sturdiness => "S",
        }
    }
}

// ============================================================================
// AttributeSet
// ============================================================================

/// Total assignment of one value per attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    values: [i32; Attribute::COUNT],
}

impl AttributeSet {
    /// Builds a set from explicit values in canonical attribute order.
    pub const fn new(might: i32, finesse: i32, wits: i32, will: i32, sturdiness: i32) -> Self {
        Self {
            values: [might, finesse, wits, will, sturdiness],
        }
    }

    /// Every attribute at the same value.
    pub const fn uniform(value: i32) -> Self {
        Self {
            values: [value; Attribute::COUNT],
        }
    }

    #[inline]
    pub const fn get(&self, attribute: Attribute) -> i32 {
        self.values[attribute.as_index()]
    }

    /// Returns a copy with one attribute replaced.
    #[must_use]
    pub const fn with_value(mut self, attribute: Attribute, value: i32) -> Self {
        self.values[attribute.as_index()] = value;
        self
    }

    #[inline]
    pub const fn values(&self) -> &[i32; Attribute::COUNT] {
        &self.values
    }

    /// Sum over all attributes. Used by point-buy accounting.
    pub fn total(&self) -> i32 {
        self.values.iter().sum()
    }
}

impl Default for AttributeSet {
    /// The point-buy floor: every attribute starts at 1.
    fn default() -> Self {
        Self::uniform(1)
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for attribute in Attribute::all() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", attribute.short_label(), self.get(attribute))?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// AttributeValues
// ============================================================================

/// Partial attribute map for formula evaluation.
///
/// Lookup of an absent attribute returns `None`; the formula layer turns
/// that into an error rather than assuming a default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeValues {
    values: BTreeMap<Attribute, i32>,
}

impl AttributeValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        self.values.insert(attribute, value);
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        self.set(attribute, value);
        self
    }

    #[inline]
    pub fn get(&self, attribute: Attribute) -> Option<i32> {
        self.values.get(&attribute).copied()
    }

    #[inline]
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.values.contains_key(&attribute)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.values.iter().map(|(attribute, value)| (*attribute, *value))
    }
}

impl From<&AttributeSet> for AttributeValues {
    fn from(set: &AttributeSet) -> Self {
        let mut values = AttributeValues::new();
        for attribute in Attribute::all() {
            values.set(attribute, set.get(attribute));
        }
        values
    }
}

impl FromIterator<(Attribute, i32)> for AttributeValues {
    fn from_iter<I: IntoIterator<Item = (Attribute, i32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
