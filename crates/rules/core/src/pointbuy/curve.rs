//! Tiered cost curve for attribute point-buy.
//!
//! A curve covers a contiguous value range `[min, max]`. For every value
//! above the floor it records the cost of the single increment that reaches
//! that value, so cumulative and delta costs fall out of one table:
//!
//! ```text
//! step_cost(v)        table lookup, 0 outside (min, max]
//! cumulative_cost(v)  sum of step costs from min+1 up to v
//! cost_between(a, b)  cumulative(b) - cumulative(a), negative = refund
//! ```
//!
//! Decreasing a value refunds exactly what raising it cost, so walking any
//! path between two values always settles at the same net spend.

use arrayvec::ArrayVec;

use crate::config::Ruleset;
use crate::error::{InputError, RulesResult};

/// One entry of a cost curve: the cost of raising a value *to* `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostStep {
    pub target: i32,
    pub cost: i32,
}

/// Validated, immutable cost curve over a contiguous value range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostCurve {
    min_value: i32,
    max_value: i32,
    steps: ArrayVec<CostStep, { Ruleset::MAX_COST_STEPS }>,
}

impl CostCurve {
    /// Builds a curve from `(target, cost)` pairs.
    ///
    /// The pairs must cover exactly `min_value + 1 ..= max_value`, in order,
    /// and every cost must be at least 1.
    pub fn new(
        min_value: i32,
        max_value: i32,
        steps: impl IntoIterator<Item = (i32, i32)>,
    ) -> RulesResult<Self> {
        if min_value > max_value {
            return Err(InputError::InvertedBounds {
                min: min_value,
                max: max_value,
            }
            .into());
        }

        let span = (max_value - min_value) as usize;
        if span > Ruleset::MAX_COST_STEPS {
            return Err(InputError::CurveTooLarge {
                steps: span,
                max: Ruleset::MAX_COST_STEPS,
            }
            .into());
        }

        let mut table: ArrayVec<CostStep, { Ruleset::MAX_COST_STEPS }> = ArrayVec::new();
        let mut expected = min_value + 1;
        for (target, cost) in steps {
            if table.len() == span {
                return Err(InputError::WrongStepCount {
                    expected: span,
                    found: table.len() + 1,
                }
                .into());
            }
            if target != expected {
                return Err(InputError::MisorderedStep {
                    expected,
                    found: target,
                }
                .into());
            }
            if cost < 1 {
                return Err(InputError::NonPositiveStepCost {
                    value: target,
                    cost,
                }
                .into());
            }
            table.push(CostStep { target, cost });
            expected += 1;
        }

        if table.len() != span {
            return Err(InputError::WrongStepCount {
                expected: span,
                found: table.len(),
            }
            .into());
        }

        Ok(Self {
            min_value,
            max_value,
            steps: table,
        })
    }

    #[inline]
    pub const fn min_value(&self) -> i32 {
        self.min_value
    }

    #[inline]
    pub const fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn steps(&self) -> &[CostStep] {
        &self.steps
    }

    /// Cost of the single increment that reaches `target`.
    ///
    /// Values at or below the floor cost nothing, and no step exists beyond
    /// the ceiling, so anything outside `(min, max]` returns 0.
    pub fn step_cost(&self, target: i32) -> i32 {
        if target <= self.min_value || target > self.max_value {
            return 0;
        }
        self.steps[(target - self.min_value - 1) as usize].cost
    }

    /// Total points needed to raise a value from the floor up to `value`.
    ///
    /// Saturates at the curve bounds: the floor and below cost 0, values past
    /// the ceiling cost the same as the ceiling.
    pub fn cumulative_cost(&self, value: i32) -> i32 {
        let top = value.min(self.max_value);
        let mut total = 0;
        let mut v = self.min_value + 1;
        while v <= top {
            total += self.step_cost(v);
            v += 1;
        }
        total
    }

    /// Net cost of moving a value from `from` to `to`.
    ///
    /// Negative results are refunds. Antisymmetric by construction:
    /// `cost_between(a, b) == -cost_between(b, a)`.
    pub fn cost_between(&self, from: i32, to: i32) -> i32 {
        self.cumulative_cost(to) - self.cumulative_cost(from)
    }
}
