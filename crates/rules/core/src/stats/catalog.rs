//! The closed set of derived stats and the catalog that computes them.
//!
//! [`FormulaCatalog`] is total by construction: it refuses to exist unless
//! it holds exactly one formula per [`DerivedStat`]. That makes every lookup
//! infallible and lets [`FormulaCatalog::evaluate_all`] produce a complete
//! [`DerivedProfile`] in one pass.

use std::fmt;

use crate::attributes::AttributeValues;
use crate::error::{InputError, RulesResult};
use crate::ids::{ArchetypeId, LineageId};
use crate::stats::formula::StatFormula;

// ============================================================================
// DerivedStat
// ============================================================================

/// Every stat the formula engine derives from attributes.
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
pub enum DerivedStat {
    MaxHealth,
    MaxStamina,
    MaxAetherPool,
    Initiative,
    Soak,
    MovementSpeed,
    CarryingCapacity,
}

impl DerivedStat {
    /// Number of derived stats.
    pub const COUNT: usize = 7;

    /// All derived stats in canonical order.
    pub const fn all() -> [DerivedStat; Self::COUNT] {
        [
            DerivedStat::MaxHealth,
            DerivedStat::MaxStamina,
            DerivedStat::MaxAetherPool,
            DerivedStat::Initiative,
            DerivedStat::Soak,
            DerivedStat::MovementSpeed,
            DerivedStat::CarryingCapacity,
        ]
    }

    /// Stable index for array-backed storage.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// FormulaCatalog
// ============================================================================

/// Complete set of formulas, one per derived stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaCatalog {
    // Ordered by DerivedStat::as_index; always exactly COUNT entries.
    formulas: Vec<StatFormula>,
}

impl FormulaCatalog {
    /// Builds a catalog from formulas in any order.
    ///
    /// Fails if any derived stat is covered twice or not at all.
    pub fn new(formulas: impl IntoIterator<Item = StatFormula>) -> RulesResult<Self> {
        let mut slots: Vec<Option<StatFormula>> = (0..DerivedStat::COUNT).map(|_| None).collect();
        for formula in formulas {
            let slot = &mut slots[formula.stat().as_index()];
            if slot.is_some() {
                return Err(InputError::DuplicateFormula {
                    stat: formula.stat(),
                }
                .into());
            }
            *slot = Some(formula);
        }

        let formulas = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    InputError::MissingFormula {
                        stat: DerivedStat::all()[index],
                    }
                    .into()
                })
            })
            .collect::<RulesResult<Vec<_>>>()?;

        Ok(Self { formulas })
    }

    /// The formula for one stat. Total, so no `Option`.
    #[inline]
    pub fn get(&self, stat: DerivedStat) -> &StatFormula {
        &self.formulas[stat.as_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatFormula> {
        self.formulas.iter()
    }

    /// Evaluates a single stat.
    pub fn evaluate(
        &self,
        stat: DerivedStat,
        attributes: &AttributeValues,
        archetype: Option<&ArchetypeId>,
        lineage: Option<&LineageId>,
    ) -> RulesResult<i32> {
        self.get(stat).evaluate(attributes, archetype, lineage)
    }

    /// Evaluates every stat into a complete profile.
    pub fn evaluate_all(
        &self,
        attributes: &AttributeValues,
        archetype: Option<&ArchetypeId>,
        lineage: Option<&LineageId>,
    ) -> RulesResult<DerivedProfile> {
        let mut values = [0i32; DerivedStat::COUNT];
        for stat in DerivedStat::all() {
            values[stat.as_index()] = self.evaluate(stat, attributes, archetype, lineage)?;
        }
        Ok(DerivedProfile { values })
    }
}

// ============================================================================
// DerivedProfile
// ============================================================================

/// Evaluated values for every derived stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedProfile {
    values: [i32; DerivedStat::COUNT],
}

impl DerivedProfile {
    #[inline]
    pub const fn get(&self, stat: DerivedStat) -> i32 {
        self.values[stat.as_index()]
    }

    #[inline]
    pub const fn values(&self) -> &[i32; DerivedStat::COUNT] {
        &self.values
    }
}

impl fmt::Display for DerivedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for stat in DerivedStat::all() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", stat, self.get(stat))?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;

    /// Flat formulas with recognizable values, plus one that scales.
    fn simple_catalog() -> FormulaCatalog {
        let formulas = DerivedStat::all().map(|stat| {
            let builder = StatFormula::builder(stat).base_value(10 + stat.as_index() as i32);
            match stat {
                DerivedStat::Initiative => builder.scale(Attribute::Finesse, 100),
                _ => builder,
            }
            .build()
            .unwrap()
        });
        FormulaCatalog::new(formulas).unwrap()
    }

    #[test]
    fn catalog_requires_exactly_one_formula_per_stat() {
        // Missing everything past MaxHealth.
        let partial = FormulaCatalog::new([StatFormula::builder(DerivedStat::MaxHealth)
            .build()
            .unwrap()]);
        assert!(partial.is_err());

        // MaxHealth twice.
        let mut formulas: Vec<StatFormula> = DerivedStat::all()
            .into_iter()
            .map(|stat| StatFormula::builder(stat).build().unwrap())
            .collect();
        formulas.push(StatFormula::builder(DerivedStat::MaxHealth).build().unwrap());
        assert!(FormulaCatalog::new(formulas).is_err());
    }

    #[test]
    fn lookup_is_total_once_constructed() {
        let catalog = simple_catalog();
        for stat in DerivedStat::all() {
            assert_eq!(catalog.get(stat).stat(), stat);
        }
    }

    #[test]
    fn evaluate_all_fills_every_slot() {
        let catalog = simple_catalog();
        let attributes = AttributeValues::new().with(Attribute::Finesse, 3);

        let profile = catalog.evaluate_all(&attributes, None, None).unwrap();

        // MaxHealth is flat: base 10 + index 0.
        assert_eq!(profile.get(DerivedStat::MaxHealth), 10);
        // Initiative adds Finesse ×1: 13 + 3 = 16.
        assert_eq!(profile.get(DerivedStat::Initiative), 16);
        assert_eq!(profile.values().len(), DerivedStat::COUNT);
    }

    #[test]
    fn evaluate_all_propagates_missing_attributes() {
        let catalog = simple_catalog();

        // Initiative scales with Finesse, which is absent here.
        let err = catalog.evaluate_all(&AttributeValues::new(), None, None).unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn stat_names_parse_case_insensitively() {
        assert_eq!(
            "max_health".parse::<DerivedStat>().unwrap(),
            DerivedStat::MaxHealth
        );
        assert_eq!(
            "MAX_AETHER_POOL".parse::<DerivedStat>().unwrap(),
            DerivedStat::MaxAetherPool
        );
        assert!("luck".parse::<DerivedStat>().is_err());
    }
}
