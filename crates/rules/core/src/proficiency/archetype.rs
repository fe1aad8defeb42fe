//! Archetype weapon grants.
//!
//! An archetype grants starting proficiency in a fixed set of weapon
//! categories. The grant is binary at creation: granted categories start
//! Proficient, everything else starts NonProficient. Higher tiers are only
//! ever earned through play.

use std::fmt;

use crate::error::{InputError, RulesResult};
use crate::ids::ArchetypeId;
use crate::proficiency::category::{CategorySet, WeaponCategory};
use crate::proficiency::tier::ProficiencyTier;

/// The weapon categories one archetype starts proficient with.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeProficiencies {
    archetype: ArchetypeId,
    proficient: CategorySet,
}

impl ArchetypeProficiencies {
    /// At or above this many grants an archetype counts as versatile.
    pub const VERSATILE_THRESHOLD: u32 = 7;

    /// At or below this many grants an archetype counts as a specialist.
    pub const SPECIALIST_THRESHOLD: u32 = 3;

    /// Builds a grant set. At least one category is required; an archetype
    /// that can hold no weapon at all is a content mistake.
    pub fn new(archetype: ArchetypeId, proficient: CategorySet) -> RulesResult<Self> {
        if proficient.is_empty() {
            return Err(InputError::EmptyProficiencySet {
                archetype: archetype.as_str().to_string(),
            }
            .into());
        }
        Ok(Self {
            archetype,
            proficient,
        })
    }

    #[inline]
    pub const fn archetype(&self) -> &ArchetypeId {
        &self.archetype
    }

    #[inline]
    pub const fn proficient(&self) -> CategorySet {
        self.proficient
    }

    #[inline]
    pub const fn is_proficient_with(&self, category: WeaponCategory) -> bool {
        self.proficient.has(category)
    }

    /// Tier a fresh character of this archetype starts at for `category`.
    pub const fn starting_tier(&self, category: WeaponCategory) -> ProficiencyTier {
        if self.is_proficient_with(category) {
            ProficiencyTier::Proficient
        } else {
            ProficiencyTier::NonProficient
        }
    }

    #[inline]
    pub const fn proficient_count(&self) -> u32 {
        self.proficient.count()
    }

    /// Categories this archetype does not start proficient with.
    pub const fn non_proficient(&self) -> CategorySet {
        self.proficient.complement()
    }

    pub const fn covers_all_weapons(&self) -> bool {
        self.proficient_count() == WeaponCategory::COUNT as u32
    }

    pub const fn is_versatile(&self) -> bool {
        self.proficient_count() >= Self::VERSATILE_THRESHOLD
    }

    pub const fn is_specialist(&self) -> bool {
        self.proficient_count() <= Self::SPECIALIST_THRESHOLD
    }
}

impl fmt::Display for ArchetypeProficiencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} proficiencies", self.archetype, self.proficient_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grants(id: &str, categories: &[WeaponCategory]) -> ArchetypeProficiencies {
        ArchetypeProficiencies::new(
            ArchetypeId::new(id).unwrap(),
            categories.iter().copied().collect(),
        )
        .unwrap()
    }

    #[test]
    fn warrior_covers_every_category() {
        let warrior = ArchetypeProficiencies::new(
            ArchetypeId::new("warrior").unwrap(),
            CategorySet::all(),
        )
        .unwrap();

        assert!(warrior.covers_all_weapons());
        assert!(warrior.is_versatile());
        assert!(!warrior.is_specialist());
        assert_eq!(warrior.proficient_count(), 11);
        assert!(warrior.non_proficient().is_empty());
        assert_eq!(
            warrior.starting_tier(WeaponCategory::Firearms),
            ProficiencyTier::Proficient
        );
    }

    #[test]
    fn mystic_is_a_specialist() {
        let mystic = grants(
            "mystic",
            &[
                WeaponCategory::Daggers,
                WeaponCategory::Staves,
                WeaponCategory::ArcaneImplements,
            ],
        );

        assert!(mystic.is_specialist());
        assert!(!mystic.is_versatile());
        assert!(!mystic.covers_all_weapons());
        assert_eq!(mystic.proficient_count(), 3);
        assert_eq!(mystic.non_proficient().count(), 8);

        assert_eq!(
            mystic.starting_tier(WeaponCategory::Staves),
            ProficiencyTier::Proficient
        );
        assert_eq!(
            mystic.starting_tier(WeaponCategory::Swords),
            ProficiencyTier::NonProficient
        );
    }

    #[test]
    fn mid_sized_grants_are_neither_label() {
        let skirmisher = grants(
            "skirmisher",
            &[
                WeaponCategory::Daggers,
                WeaponCategory::Swords,
                WeaponCategory::Axes,
                WeaponCategory::Bows,
                WeaponCategory::Crossbows,
            ],
        );

        assert!(!skirmisher.is_versatile());
        assert!(!skirmisher.is_specialist());
    }

    #[test]
    fn empty_grant_sets_are_rejected() {
        let result = ArchetypeProficiencies::new(
            ArchetypeId::new("pacifist").unwrap(),
            CategorySet::empty(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn display_counts_the_grants() {
        let mystic = grants("mystic", &[WeaponCategory::Staves]);
        assert_eq!(mystic.to_string(), "mystic: 1 proficiencies");
    }
}
