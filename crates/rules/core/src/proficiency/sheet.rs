//! A character's complete proficiency record.
//!
//! One [`ProficiencyProgress`] per weapon category, always all eleven.
//! Transitions return a new sheet; nothing mutates in place.

use std::fmt;

use crate::error::RulesResult;
use crate::proficiency::archetype::ArchetypeProficiencies;
use crate::proficiency::category::{CategorySet, WeaponCategory};
use crate::proficiency::progress::ProficiencyProgress;
use crate::proficiency::tier::{AdvancementThresholds, ProficiencyTier};

/// Advancement state for every weapon category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProficiencySheet {
    // Ordered by WeaponCategory::as_index.
    progress: [ProficiencyProgress; WeaponCategory::COUNT],
}

impl ProficiencySheet {
    /// Fresh sheet for a new character: granted categories start Proficient
    /// with zero experience, everything else NonProficient.
    pub fn from_archetype(
        grants: &ArchetypeProficiencies,
        thresholds: AdvancementThresholds,
    ) -> Self {
        let progress = WeaponCategory::all().map(|category| {
            ProficiencyProgress::fresh(category, grants.starting_tier(category), thresholds)
        });
        Self { progress }
    }

    /// Every category at the same tier. Useful for monsters and tests.
    pub fn uniform(tier: ProficiencyTier, thresholds: AdvancementThresholds) -> Self {
        let progress = WeaponCategory::all()
            .map(|category| ProficiencyProgress::fresh(category, tier, thresholds));
        Self { progress }
    }

    #[inline]
    pub const fn progress(&self, category: WeaponCategory) -> &ProficiencyProgress {
        &self.progress[category.as_index()]
    }

    #[inline]
    pub const fn tier(&self, category: WeaponCategory) -> ProficiencyTier {
        self.progress(category).tier()
    }

    #[inline]
    pub const fn experience(&self, category: WeaponCategory) -> u32 {
        self.progress(category).experience()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProficiencyProgress> {
        self.progress.iter()
    }

    /// Banks combat experience for one category.
    pub fn with_experience(&self, category: WeaponCategory, amount: u32) -> RulesResult<Self> {
        let mut next = self.clone();
        next.progress[category.as_index()] = self.progress(category).with_experience(amount)?;
        Ok(next)
    }

    /// Advances one category to its next tier.
    pub fn with_advancement(&self, category: WeaponCategory) -> RulesResult<Self> {
        let mut next = self.clone();
        next.progress[category.as_index()] = self.progress(category).advanced()?;
        Ok(next)
    }

    /// Categories currently at exactly `tier`.
    pub fn categories_at(&self, tier: ProficiencyTier) -> CategorySet {
        self.progress
            .iter()
            .filter(|progress| progress.tier() == tier)
            .map(ProficiencyProgress::category)
            .collect()
    }

    pub fn count_at(&self, tier: ProficiencyTier) -> u32 {
        self.categories_at(tier).count()
    }

    /// Categories with enough banked experience to advance right now.
    pub fn ready_to_advance(&self) -> CategorySet {
        self.progress
            .iter()
            .filter(|progress| progress.has_reached_threshold())
            .map(ProficiencyProgress::category)
            .collect()
    }

    /// Lifetime experience currently banked across all categories.
    pub fn total_experience(&self) -> u64 {
        self.progress
            .iter()
            .map(|progress| u64::from(progress.experience()))
            .sum()
    }
}

impl fmt::Display for ProficiencySheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tier in ProficiencyTier::all() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", tier, self.count_at(tier))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ArchetypeId;

    fn mystic_sheet() -> ProficiencySheet {
        let grants = ArchetypeProficiencies::new(
            ArchetypeId::new("mystic").unwrap(),
            [
                WeaponCategory::Daggers,
                WeaponCategory::Staves,
                WeaponCategory::ArcaneImplements,
            ]
            .into_iter()
            .collect(),
        )
        .unwrap();
        ProficiencySheet::from_archetype(&grants, AdvancementThresholds::STANDARD)
    }

    #[test]
    fn fresh_sheet_mirrors_the_archetype_grants() {
        let sheet = mystic_sheet();

        assert_eq!(sheet.count_at(ProficiencyTier::Proficient), 3);
        assert_eq!(sheet.count_at(ProficiencyTier::NonProficient), 8);
        assert_eq!(sheet.count_at(ProficiencyTier::Expert), 0);

        assert_eq!(sheet.tier(WeaponCategory::Staves), ProficiencyTier::Proficient);
        assert_eq!(sheet.tier(WeaponCategory::Swords), ProficiencyTier::NonProficient);
        assert_eq!(sheet.total_experience(), 0);
    }

    #[test]
    fn experience_and_advancement_touch_only_their_category() {
        let sheet = mystic_sheet();

        let trained = sheet.with_experience(WeaponCategory::Staves, 25).unwrap();
        assert_eq!(trained.experience(WeaponCategory::Staves), 25);
        assert_eq!(trained.experience(WeaponCategory::Daggers), 0);
        assert_eq!(trained.ready_to_advance(), WeaponCategory::Staves.flag());

        let advanced = trained.with_advancement(WeaponCategory::Staves).unwrap();
        assert_eq!(advanced.tier(WeaponCategory::Staves), ProficiencyTier::Expert);
        assert_eq!(advanced.experience(WeaponCategory::Staves), 0);
        // The rest of the sheet is untouched.
        assert_eq!(advanced.tier(WeaponCategory::Daggers), ProficiencyTier::Proficient);
        assert_eq!(advanced.count_at(ProficiencyTier::Expert), 1);
    }

    #[test]
    fn ready_to_advance_is_empty_below_thresholds() {
        let sheet = mystic_sheet();
        let partial = sheet.with_experience(WeaponCategory::Staves, 24).unwrap();

        assert!(partial.ready_to_advance().is_empty());
    }

    #[test]
    fn advancing_an_unready_category_is_legal_but_master_is_not() {
        // Advancement is a table decision; the sheet only refuses the
        // impossible step past Master.
        let sheet = ProficiencySheet::uniform(
            ProficiencyTier::Master,
            AdvancementThresholds::STANDARD,
        );

        let err = sheet.with_advancement(WeaponCategory::Swords).unwrap_err();
        assert!(err.is_operation());
    }

    #[test]
    fn total_experience_sums_every_category() {
        let sheet = mystic_sheet()
            .with_experience(WeaponCategory::Staves, 12)
            .unwrap()
            .with_experience(WeaponCategory::Swords, 5)
            .unwrap();

        // 12 + 5 = 17
        assert_eq!(sheet.total_experience(), 17);
    }

    #[test]
    fn display_counts_categories_per_tier() {
        assert_eq!(
            mystic_sheet().to_string(),
            "non_proficient=8 proficient=3 expert=0 master=0"
        );
    }
}
