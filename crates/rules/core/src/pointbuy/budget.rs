//! Point pools and affordability queries.
//!
//! Combines a [`CostCurve`] with the starting point pools characters draw
//! from. Affordability never errors: out-of-range targets simply answer
//! `false`, and decreases are always affordable because they refund points.

use std::collections::BTreeMap;

use crate::error::{InputError, RulesResult};
use crate::ids::ArchetypeId;
use crate::pointbuy::curve::CostCurve;

/// Cost curve plus starting pools, with optional per-archetype overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointBuyConfig {
    curve: CostCurve,
    standard_pool: i32,
    pool_overrides: BTreeMap<ArchetypeId, i32>,
}

impl PointBuyConfig {
    /// Builds a configuration. Pools must be non-negative.
    pub fn new(
        curve: CostCurve,
        standard_pool: i32,
        pool_overrides: impl IntoIterator<Item = (ArchetypeId, i32)>,
    ) -> RulesResult<Self> {
        if standard_pool < 0 {
            return Err(InputError::NegativePool {
                points: standard_pool,
            }
            .into());
        }
        let overrides: BTreeMap<ArchetypeId, i32> = pool_overrides.into_iter().collect();
        for points in overrides.values() {
            if *points < 0 {
                return Err(InputError::NegativePool { points: *points }.into());
            }
        }
        Ok(Self {
            curve,
            standard_pool,
            pool_overrides: overrides,
        })
    }

    #[inline]
    pub fn curve(&self) -> &CostCurve {
        &self.curve
    }

    #[inline]
    pub const fn standard_pool(&self) -> i32 {
        self.standard_pool
    }

    /// Starting pool for an archetype. Archetypes without an override use
    /// the standard pool.
    pub fn pool_for(&self, archetype: &ArchetypeId) -> i32 {
        self.pool_overrides
            .get(archetype)
            .copied()
            .unwrap_or(self.standard_pool)
    }

    pub fn pool_overrides(&self) -> impl Iterator<Item = (&ArchetypeId, i32)> {
        self.pool_overrides.iter().map(|(id, points)| (id, *points))
    }

    /// Whether a change from `from` to `to` fits in `points_available`.
    ///
    /// Targets outside the curve's range are never affordable. Decreases
    /// always are, since they only refund points.
    pub fn can_afford(&self, from: i32, to: i32, points_available: i32) -> bool {
        if to < self.curve.min_value() || to > self.curve.max_value() {
            return false;
        }
        if to < from {
            return true;
        }
        self.curve.cost_between(from, to) <= points_available
    }

    /// Highest value reachable from `from` with `points_available`, walking
    /// the curve one step at a time.
    pub fn max_reachable(&self, from: i32, points_available: i32) -> i32 {
        let mut current = from;
        let mut remaining = points_available;
        while current < self.curve.max_value() {
            let next_cost = self.curve.step_cost(current + 1);
            if next_cost > remaining {
                break;
            }
            remaining -= next_cost;
            current += 1;
        }
        current
    }
}
