//! Derived-stat formulas.
//!
//! A formula computes one derived stat from attribute values plus archetype
//! and lineage modifiers:
//!
//! ```text
//! raw   = base + Σ attribute × coefficient + archetype flat + lineage flat
//! final = truncate(raw × lineage multiplier)
//! ```
//!
//! # Determinism
//!
//! No floating point anywhere. Coefficients are stored in hundredths
//! (50 = ×0.50, 1000 = ×10) and multipliers in percent (110 = ×1.10).
//! Everything accumulates in `i64` hundredths and the one division at the
//! end truncates toward zero, so fractional results lose their fraction
//! exactly once and identical inputs produce identical outputs on every
//! platform.
//!
//! # Lookup semantics
//!
//! Archetype and lineage keys are open-ended content. A key with no entry in
//! a modifier map is not an error; it contributes the neutral value (0 flat,
//! ×1.00). A *missing attribute* during evaluation is an error: the formula
//! declared it needs that attribute and silently defaulting would hide a
//! content bug.

use std::collections::BTreeMap;
use std::fmt;

use arrayvec::ArrayVec;

use crate::attributes::{Attribute, AttributeValues};
use crate::error::{InputError, RulesResult};
use crate::ids::{ArchetypeId, LineageId};
use crate::stats::catalog::DerivedStat;

/// Neutral multiplier: ×1.00.
pub const NEUTRAL_MULTIPLIER_PERCENT: i32 = 100;

/// One attribute's contribution to a formula, with the coefficient in
/// hundredths of a point per attribute point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalingTerm {
    pub attribute: Attribute,
    pub per_point_hundredths: i32,
}

/// Immutable recipe for one derived stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatFormula {
    stat: DerivedStat,
    base_value: i32,
    scaling: ArrayVec<ScalingTerm, { Attribute::COUNT }>,
    archetype_bonuses: BTreeMap<ArchetypeId, i32>,
    lineage_bonuses: BTreeMap<LineageId, i32>,
    lineage_multipliers: BTreeMap<LineageId, i32>,
}

impl StatFormula {
    pub fn builder(stat: DerivedStat) -> StatFormulaBuilder {
        StatFormulaBuilder {
            stat,
            base_value: 0,
            scaling: Vec::new(),
            archetype_bonuses: BTreeMap::new(),
            lineage_bonuses: BTreeMap::new(),
            lineage_multipliers: BTreeMap::new(),
        }
    }

    #[inline]
    pub const fn stat(&self) -> DerivedStat {
        self.stat
    }

    #[inline]
    pub const fn base_value(&self) -> i32 {
        self.base_value
    }

    pub fn scaling(&self) -> &[ScalingTerm] {
        &self.scaling
    }

    pub fn scales_with(&self, attribute: Attribute) -> bool {
        self.scaling.iter().any(|term| term.attribute == attribute)
    }

    /// Flat bonus for an archetype; 0 when the map has no entry.
    pub fn archetype_bonus(&self, archetype: &ArchetypeId) -> i32 {
        self.archetype_bonuses.get(archetype).copied().unwrap_or(0)
    }

    /// Flat bonus for a lineage; 0 when the map has no entry.
    pub fn lineage_bonus(&self, lineage: &LineageId) -> i32 {
        self.lineage_bonuses.get(lineage).copied().unwrap_or(0)
    }

    /// Multiplier for a lineage in percent; ×1.00 when the map has no entry.
    pub fn lineage_multiplier_percent(&self, lineage: &LineageId) -> i32 {
        self.lineage_multipliers
            .get(lineage)
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER_PERCENT)
    }

    /// Evaluates the formula for one character.
    ///
    /// `attributes` must contain every attribute this formula scales with;
    /// a missing one is an input error. `None` archetype or lineage simply
    /// skips the corresponding modifiers.
    pub fn evaluate(
        &self,
        attributes: &AttributeValues,
        archetype: Option<&ArchetypeId>,
        lineage: Option<&LineageId>,
    ) -> RulesResult<i32> {
        // Accumulate in hundredths so scaling keeps its fraction until the
        // single truncation at the end.
        let mut total: i64 = i64::from(self.base_value) * 100;

        for term in &self.scaling {
            let value = attributes.get(term.attribute).ok_or(InputError::MissingAttribute {
                stat: self.stat,
                attribute: term.attribute,
            })?;
            total += i64::from(value) * i64::from(term.per_point_hundredths);
        }

        if let Some(archetype) = archetype {
            total += i64::from(self.archetype_bonus(archetype)) * 100;
        }

        let mut multiplier = i64::from(NEUTRAL_MULTIPLIER_PERCENT);
        if let Some(lineage) = lineage {
            total += i64::from(self.lineage_bonus(lineage)) * 100;
            multiplier = i64::from(self.lineage_multiplier_percent(lineage));
        }

        // hundredths × percent means one division by 10_000 lands back on
        // whole points. i64 division truncates toward zero, for negative
        // totals as well.
        Ok(((total * multiplier) / 10_000) as i32)
    }
}

impl fmt::Display for StatFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: base {}, {} scaling, {} archetype bonuses, {} lineage bonuses, {} multipliers",
            self.stat,
            self.base_value,
            self.scaling.len(),
            self.archetype_bonuses.len(),
            self.lineage_bonuses.len(),
            self.lineage_multipliers.len()
        )
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`StatFormula`].
#[must_use]
pub struct StatFormulaBuilder {
    stat: DerivedStat,
    base_value: i32,
    scaling: Vec<ScalingTerm>,
    archetype_bonuses: BTreeMap<ArchetypeId, i32>,
    lineage_bonuses: BTreeMap<LineageId, i32>,
    lineage_multipliers: BTreeMap<LineageId, i32>,
}

impl StatFormulaBuilder {
    pub fn base_value(mut self, value: i32) -> Self {
        self.base_value = value;
        self
    }

    /// Adds a scaling term. The coefficient is in hundredths of a point per
    /// attribute point: `100` = 1 point, `50` = half a point.
    pub fn scale(mut self, attribute: Attribute, per_point_hundredths: i32) -> Self {
        self.scaling.push(ScalingTerm {
            attribute,
            per_point_hundredths,
        });
        self
    }

    pub fn archetype_bonus(mut self, archetype: ArchetypeId, bonus: i32) -> Self {
        self.archetype_bonuses.insert(archetype, bonus);
        self
    }

    pub fn lineage_bonus(mut self, lineage: LineageId, bonus: i32) -> Self {
        self.lineage_bonuses.insert(lineage, bonus);
        self
    }

    /// Sets a lineage multiplier in percent: `110` = ×1.10.
    pub fn lineage_multiplier_percent(mut self, lineage: LineageId, percent: i32) -> Self {
        self.lineage_multipliers.insert(lineage, percent);
        self
    }

    /// Validates and freezes the formula.
    pub fn build(self) -> RulesResult<StatFormula> {
        let mut scaling: ArrayVec<ScalingTerm, { Attribute::COUNT }> = ArrayVec::new();
        for term in self.scaling {
            if scaling.iter().any(|existing| existing.attribute == term.attribute) {
                return Err(InputError::DuplicateScaling {
                    stat: self.stat,
                    attribute: term.attribute,
                }
                .into());
            }
            scaling.push(term);
        }
        Ok(StatFormula {
            stat: self.stat,
            base_value: self.base_value,
            scaling,
            archetype_bonuses: self.archetype_bonuses,
            lineage_bonuses: self.lineage_bonuses,
            lineage_multipliers: self.lineage_multipliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> ArchetypeId {
        ArchetypeId::new("warrior").unwrap()
    }

    fn mystic() -> ArchetypeId {
        ArchetypeId::new("mystic").unwrap()
    }

    fn clan_born() -> LineageId {
        LineageId::new("clan-born").unwrap()
    }

    fn rune_marked() -> LineageId {
        LineageId::new("rune-marked").unwrap()
    }

    /// base 50 + Sturdiness ×10, warrior +49, clan-born +5.
    fn max_health() -> StatFormula {
        StatFormula::builder(DerivedStat::MaxHealth)
            .base_value(50)
            .scale(Attribute::Sturdiness, 1000)
            .archetype_bonus(warrior(), 49)
            .archetype_bonus(mystic(), 20)
            .lineage_bonus(clan_born(), 5)
            .build()
            .unwrap()
    }

    /// Will ×10 + Wits ×5, mystic +20, rune-marked +5 and ×1.10.
    fn max_aether() -> StatFormula {
        StatFormula::builder(DerivedStat::MaxAetherPool)
            .scale(Attribute::Will, 1000)
            .scale(Attribute::Wits, 500)
            .archetype_bonus(mystic(), 20)
            .lineage_bonus(rune_marked(), 5)
            .lineage_multiplier_percent(rune_marked(), 110)
            .build()
            .unwrap()
    }

    fn warrior_attributes() -> AttributeValues {
        AttributeValues::new()
            .with(Attribute::Might, 4)
            .with(Attribute::Finesse, 3)
            .with(Attribute::Wits, 2)
            .with(Attribute::Will, 2)
            .with(Attribute::Sturdiness, 4)
    }

    fn mystic_attributes() -> AttributeValues {
        AttributeValues::new()
            .with(Attribute::Might, 2)
            .with(Attribute::Finesse, 3)
            .with(Attribute::Wits, 4)
            .with(Attribute::Will, 4)
            .with(Attribute::Sturdiness, 2)
    }

    #[test]
    fn health_stacks_base_scaling_and_flat_bonuses() {
        let formula = max_health();

        // 50 + 4×10 + 49 = 139
        let hp = formula
            .evaluate(&warrior_attributes(), Some(&warrior()), None)
            .unwrap();
        assert_eq!(hp, 139);

        // 139 + 5 = 144 with the clan-born flat bonus.
        let hp = formula
            .evaluate(&warrior_attributes(), Some(&warrior()), Some(&clan_born()))
            .unwrap();
        assert_eq!(hp, 144);
    }

    #[test]
    fn multiplier_truncates_the_half_point() {
        let formula = max_aether();

        // 4×10 + 4×5 + 20 = 80 without a lineage.
        let aether = formula
            .evaluate(&mystic_attributes(), Some(&mystic()), None)
            .unwrap();
        assert_eq!(aether, 80);

        // (80 + 5) × 1.10 = 93.5, truncated to 93.
        let aether = formula
            .evaluate(&mystic_attributes(), Some(&mystic()), Some(&rune_marked()))
            .unwrap();
        assert_eq!(aether, 93);
    }

    #[test]
    fn unknown_keys_contribute_nothing() {
        let formula = max_health();
        let wanderer = ArchetypeId::new("wanderer").unwrap();
        let forgotten = LineageId::new("forgotten").unwrap();

        // 50 + 4×10 = 90: neither key has an entry.
        let hp = formula
            .evaluate(&warrior_attributes(), Some(&wanderer), Some(&forgotten))
            .unwrap();
        assert_eq!(hp, 90);

        // Same result with no keys at all.
        let hp = formula.evaluate(&warrior_attributes(), None, None).unwrap();
        assert_eq!(hp, 90);
    }

    #[test]
    fn missing_scaled_attribute_is_an_input_error() {
        let formula = max_aether();
        let only_will = AttributeValues::new().with(Attribute::Will, 4);

        let err = formula.evaluate(&only_will, None, None).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn unscaled_attributes_need_not_be_supplied() {
        let formula = max_health();
        let only_sturdiness = AttributeValues::new().with(Attribute::Sturdiness, 4);

        // 50 + 4×10 = 90
        let hp = formula.evaluate(&only_sturdiness, None, None).unwrap();
        assert_eq!(hp, 90);
    }

    #[test]
    fn half_point_coefficients_truncate_toward_zero() {
        // Soak: Sturdiness ×0.5 with no base.
        let formula = StatFormula::builder(DerivedStat::Soak)
            .scale(Attribute::Sturdiness, 50)
            .build()
            .unwrap();

        let odd = AttributeValues::new().with(Attribute::Sturdiness, 5);
        // 5 × 0.5 = 2.5 -> 2
        assert_eq!(formula.evaluate(&odd, None, None).unwrap(), 2);

        let negative = AttributeValues::new().with(Attribute::Sturdiness, -5);
        // -2.5 truncates toward zero, not toward negative infinity.
        assert_eq!(formula.evaluate(&negative, None, None).unwrap(), -2);
    }

    #[test]
    fn multiplier_applies_after_every_flat_term() {
        // base 10, +10 lineage flat, ×1.50: (10 + 10) × 1.5 = 30.
        // Flat-after-multiply would give 10 × 1.5 + 10 = 25 instead.
        let blessed = LineageId::new("blessed").unwrap();
        let formula = StatFormula::builder(DerivedStat::MaxStamina)
            .base_value(10)
            .lineage_bonus(blessed.clone(), 10)
            .lineage_multiplier_percent(blessed.clone(), 150)
            .build()
            .unwrap();

        let value = formula
            .evaluate(&AttributeValues::new(), None, Some(&blessed))
            .unwrap();
        assert_eq!(value, 30);
    }

    #[test]
    fn duplicate_scaling_attribute_is_rejected() {
        let result = StatFormula::builder(DerivedStat::Initiative)
            .scale(Attribute::Finesse, 100)
            .scale(Attribute::Finesse, 50)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let formula = max_aether();
        let attributes = mystic_attributes();

        let first = formula
            .evaluate(&attributes, Some(&mystic()), Some(&rune_marked()))
            .unwrap();
        for _ in 0..100 {
            let again = formula
                .evaluate(&attributes, Some(&mystic()), Some(&rune_marked()))
                .unwrap();
            assert_eq!(first, again);
        }
    }
}
