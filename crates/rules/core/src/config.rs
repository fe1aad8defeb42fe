//! The assembled ruleset and its deterministic digest.

use std::collections::BTreeMap;

use crate::ids::ArchetypeId;
use crate::pointbuy::PointBuyConfig;
use crate::proficiency::{
    AdvancementThresholds, ArchetypeProficiencies, ProficiencySheet, TierEffectTable,
};
use crate::stats::FormulaCatalog;
use crate::stress::StressTuning;

/// Everything the four engines need, bundled as one immutable value.
///
/// A `Ruleset` is assembled once (from shipped defaults or loaded content)
/// and then shared; all rule evaluation happens against it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ruleset {
    point_buy: PointBuyConfig,
    formulas: FormulaCatalog,
    thresholds: AdvancementThresholds,
    tier_effects: TierEffectTable,
    archetypes: BTreeMap<ArchetypeId, ArchetypeProficiencies>,
    stress: StressTuning,
}

impl Ruleset {
    // ===== compile-time constants used as type parameters =====
    /// Maximum steps a cost curve can hold.
    pub const MAX_COST_STEPS: usize = 16;

    pub fn new(
        point_buy: PointBuyConfig,
        formulas: FormulaCatalog,
        thresholds: AdvancementThresholds,
        tier_effects: TierEffectTable,
        archetypes: impl IntoIterator<Item = ArchetypeProficiencies>,
        stress: StressTuning,
    ) -> Self {
        let archetypes = archetypes
            .into_iter()
            .map(|grants| (grants.archetype().clone(), grants))
            .collect();
        Self {
            point_buy,
            formulas,
            thresholds,
            tier_effects,
            archetypes,
            stress,
        }
    }

    #[inline]
    pub fn point_buy(&self) -> &PointBuyConfig {
        &self.point_buy
    }

    #[inline]
    pub fn formulas(&self) -> &FormulaCatalog {
        &self.formulas
    }

    #[inline]
    pub const fn thresholds(&self) -> AdvancementThresholds {
        self.thresholds
    }

    #[inline]
    pub const fn tier_effects(&self) -> &TierEffectTable {
        &self.tier_effects
    }

    #[inline]
    pub const fn stress(&self) -> &StressTuning {
        &self.stress
    }

    pub fn archetype(&self, id: &ArchetypeId) -> Option<&ArchetypeProficiencies> {
        self.archetypes.get(id)
    }

    pub fn archetypes(&self) -> impl Iterator<Item = &ArchetypeProficiencies> {
        self.archetypes.values()
    }

    pub fn archetype_count(&self) -> usize {
        self.archetypes.len()
    }

    /// Fresh proficiency sheet for a character of `archetype`, or `None`
    /// when the ruleset knows no such archetype.
    pub fn starting_sheet(&self, archetype: &ArchetypeId) -> Option<ProficiencySheet> {
        self.archetype(archetype)
            .map(|grants| ProficiencySheet::from_archetype(grants, self.thresholds))
    }
}

/// Computes a deterministic digest of a ruleset.
///
/// Two tables producing the same digest are guaranteed to produce the same
/// numbers for every character, which is what play across machines needs to
/// verify before starting.
///
/// # Design
///
/// - bincode serialization is deterministic and consistent
/// - SHA-256 commits to every table the ruleset carries
/// - Map-backed parts serialize in key order, so insertion order is
///   irrelevant
///
/// Requires the `serde` feature.
#[cfg(feature = "serde")]
pub fn ruleset_digest(ruleset: &Ruleset) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    if let Ok(bytes) = bincode::serialize(ruleset) {
        hasher.update(&bytes);
    }

    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointbuy::CostCurve;
    use crate::proficiency::{CategorySet, WeaponCategory};
    use crate::stats::{DerivedStat, StatFormula};

    fn minimal_ruleset() -> Ruleset {
        let curve = CostCurve::new(
            1,
            10,
            (2..=8).map(|v| (v, 1)).chain([(9, 2), (10, 2)]),
        )
        .unwrap();
        let point_buy = PointBuyConfig::new(curve, 15, []).unwrap();
        let formulas = FormulaCatalog::new(
            DerivedStat::all().map(|stat| StatFormula::builder(stat).build().unwrap()),
        )
        .unwrap();
        let warrior = ArchetypeProficiencies::new(
            ArchetypeId::new("warrior").unwrap(),
            CategorySet::all(),
        )
        .unwrap();
        let mystic = ArchetypeProficiencies::new(
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
        Ruleset::new(
            point_buy,
            formulas,
            AdvancementThresholds::STANDARD,
            TierEffectTable::STANDARD,
            [warrior, mystic],
            StressTuning::STANDARD,
        )
    }

    #[test]
    fn archetype_lookup_is_keyed_by_id() {
        let ruleset = minimal_ruleset();
        let warrior = ArchetypeId::new("warrior").unwrap();
        let unknown = ArchetypeId::new("bard").unwrap();

        assert_eq!(ruleset.archetype_count(), 2);
        assert!(ruleset.archetype(&warrior).is_some());
        assert!(ruleset.archetype(&unknown).is_none());
    }

    #[test]
    fn starting_sheet_follows_the_grants() {
        let ruleset = minimal_ruleset();
        let mystic = ArchetypeId::new("mystic").unwrap();

        let sheet = ruleset.starting_sheet(&mystic).unwrap();
        assert_eq!(sheet.count_at(crate::proficiency::ProficiencyTier::Proficient), 3);

        let unknown = ArchetypeId::new("bard").unwrap();
        assert!(ruleset.starting_sheet(&unknown).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn digest_is_stable_for_equal_rulesets() {
        let a = minimal_ruleset();
        let b = minimal_ruleset();

        assert_eq!(ruleset_digest(&a), ruleset_digest(&b));
        assert_eq!(hex::encode(ruleset_digest(&a)).len(), 64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn digest_changes_when_a_table_changes() {
        let base = minimal_ruleset();

        let mut tweaked = minimal_ruleset();
        tweaked.thresholds = AdvancementThresholds::new(10, 30, 60).unwrap();

        assert_ne!(ruleset_digest(&base), ruleset_digest(&tweaked));
    }
}
