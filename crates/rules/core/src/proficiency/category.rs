//! Weapon categories and dense category sets.
//!
//! Eleven categories fit comfortably in a `u16` bitset, which keeps
//! archetype proficiency grants and sheet queries cheap and makes set
//! algebra (union, complement, counting) trivial.

use crate::error::{InputError, RulesResult};

/// Weapon category, the unit proficiency is tracked at.
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
pub enum WeaponCategory {
    ArcaneImplements,
    Axes,
    Bows,
    Crossbows,
    Daggers,
    Firearms,
    Hammers,
    Polearms,
    Shields,
    Staves,
    Swords,
}

impl WeaponCategory {
    /// Number of weapon categories.
    pub const COUNT: usize = 11;

    /// All categories in canonical order.
    pub const fn all() -> [WeaponCategory; Self::COUNT] {
        [
            WeaponCategory::ArcaneImplements,
            WeaponCategory::Axes,
            WeaponCategory::Bows,
            WeaponCategory::Crossbows,
            WeaponCategory::Daggers,
            WeaponCategory::Firearms,
            WeaponCategory::Hammers,
            WeaponCategory::Polearms,
            WeaponCategory::Shields,
            WeaponCategory::Staves,
            WeaponCategory::Swords,
        ]
    }

    /// Stable index for array-backed storage.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Single-bit set containing just this category.
    #[inline]
    pub const fn flag(self) -> CategorySet {
        CategorySet::from_bits_truncate(1 << self.as_index())
    }

    /// Parses a category name, reporting what was being parsed on failure.
    pub fn parse(raw: &str) -> RulesResult<Self> {
        raw.trim().parse().map_err(|_| {
            InputError::UnknownName {
                what: "weapon category",
                name: raw.to_string(),
            }
            .into()
        })
    }
}

bitflags::bitflags! {
    /// Set of weapon categories, one bit per [`WeaponCategory`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CategorySet: u16 {
        const ARCANE_IMPLEMENTS = 1 << 0;
        const AXES = 1 << 1;
        const BOWS = 1 << 2;
        const CROSSBOWS = 1 << 3;
        const DAGGERS = 1 << 4;
        const FIREARMS = 1 << 5;
        const HAMMERS = 1 << 6;
        const POLEARMS = 1 << 7;
        const SHIELDS = 1 << 8;
        const STAVES = 1 << 9;
        const SWORDS = 1 << 10;
    }
}

impl CategorySet {
    /// Whether this set contains a specific category.
    #[inline]
    pub const fn has(self, category: WeaponCategory) -> bool {
        self.contains(category.flag())
    }

    /// Number of categories in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Categories in the set, in canonical order.
    pub fn categories(self) -> impl Iterator<Item = WeaponCategory> {
        WeaponCategory::all()
            .into_iter()
            .filter(move |category| self.has(*category))
    }
}

impl FromIterator<WeaponCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = WeaponCategory>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CategorySet::empty(), |set, category| set | category.flag())
    }
}

impl From<WeaponCategory> for CategorySet {
    fn from(category: WeaponCategory) -> Self {
        category.flag()
    }
}
