//! Stress recovery: rest, sanctuary, milestones, and trauma resolution.
//!
//! Recovery amounts depend on the rest taken and on Will, scaled by the
//! tuning knobs in [`StressTuning`]. Trauma resolution is the one move that
//! can *raise* stress: it resets to a fixed value whatever the current one,
//! because the check's outcome replaces the old state rather than easing it.

use std::fmt;

use crate::error::{InputError, RulesResult};
use crate::stress::stage::StressStage;
use crate::stress::state::StressState;

/// Kind of downtime taken to recover stress.
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
pub enum RestType {
    /// A breather: Will × short rest multiplier.
    Short,
    /// A night's sleep: Will × long rest multiplier.
    Long,
    /// True safety; clears the track entirely.
    Sanctuary,
    /// A narrative milestone: flat amount, independent of Will.
    Milestone,
}

// ============================================================================
// Tuning
// ============================================================================

/// Recovery and trauma-reset knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressTuning {
    short_rest_multiplier: u32,
    long_rest_multiplier: u32,
    milestone_recovery: u32,
    trauma_pass_reset: u32,
    trauma_fail_reset: u32,
}

impl StressTuning {
    /// The shipped tuning: short ×2, long ×5, milestone 25, trauma resets
    /// to 75 on a pass and 50 on a fail.
    pub const STANDARD: Self = Self {
        short_rest_multiplier: 2,
        long_rest_multiplier: 5,
        milestone_recovery: 25,
        trauma_pass_reset: 75,
        trauma_fail_reset: 50,
    };

    /// Trauma resets must land on the track.
    pub fn new(
        short_rest_multiplier: u32,
        long_rest_multiplier: u32,
        milestone_recovery: u32,
        trauma_pass_reset: u32,
        trauma_fail_reset: u32,
    ) -> RulesResult<Self> {
        for value in [trauma_pass_reset, trauma_fail_reset] {
            if value > StressState::MAX {
                return Err(InputError::ResetAboveMaximum {
                    value,
                    max: StressState::MAX,
                }
                .into());
            }
        }
        Ok(Self {
            short_rest_multiplier,
            long_rest_multiplier,
            milestone_recovery,
            trauma_pass_reset,
            trauma_fail_reset,
        })
    }

    /// Stress recovered by a rest, given the character's Will.
    ///
    /// Negative Will counts as zero. Sanctuary always clears the whole
    /// track, so it reports the full track length.
    pub const fn recovery_amount(&self, rest: RestType, will: i32) -> u32 {
        let will = if will > 0 { will as u32 } else { 0 };
        match rest {
            RestType::Short => will.saturating_mul(self.short_rest_multiplier),
            RestType::Long => will.saturating_mul(self.long_rest_multiplier),
            RestType::Sanctuary => StressState::MAX,
            RestType::Milestone => self.milestone_recovery,
        }
    }

    /// Value the track resets to after a trauma check.
    pub const fn trauma_reset(&self, passed: bool) -> u32 {
        if passed {
            self.trauma_pass_reset
        } else {
            self.trauma_fail_reset
        }
    }

    /// Takes a rest, recovering stress according to its kind.
    pub fn recover(
        &self,
        state: StressState,
        rest: RestType,
        will: i32,
    ) -> (StressState, StressRecoveryResult) {
        let after = state.with_reduced(self.recovery_amount(rest, will));
        let result = StressRecoveryResult::new(state.current(), after.current(), Some(rest));
        (after, result)
    }

    /// Resolves a trauma check, resetting the track to the outcome's value.
    ///
    /// Note this replaces rather than reduces: resolving from below the
    /// reset value moves stress up to it.
    pub fn resolve_trauma_check(
        &self,
        state: StressState,
        passed: bool,
    ) -> (StressState, StressRecoveryResult) {
        let after = StressState::new(self.trauma_reset(passed));
        let result = StressRecoveryResult::new(state.current(), after.current(), None);
        (after, result)
    }
}

impl Default for StressTuning {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Recovers a flat amount from an effect or ability, outside any rest.
pub fn recover_stress(state: StressState, amount: u32) -> (StressState, StressRecoveryResult) {
    let after = state.with_reduced(amount);
    let result = StressRecoveryResult::new(state.current(), after.current(), None);
    (after, result)
}

// ============================================================================
// Result
// ============================================================================

/// Record of one recovery or reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressRecoveryResult {
    before: StressState,
    after: StressState,
    rest: Option<RestType>,
}

impl StressRecoveryResult {
    /// Builds a record from raw stress values, clamping both onto the track.
    /// `rest` is `None` for recovery that came from no rest at all.
    pub const fn new(previous_stress: u32, new_stress: u32, rest: Option<RestType>) -> Self {
        Self {
            before: StressState::new(previous_stress),
            after: StressState::new(new_stress),
            rest,
        }
    }

    #[inline]
    pub const fn before(&self) -> StressState {
        self.before
    }

    #[inline]
    pub const fn after(&self) -> StressState {
        self.after
    }

    #[inline]
    pub const fn rest(&self) -> Option<RestType> {
        self.rest
    }

    /// Stress actually shed. Zero when a trauma reset moved the value up.
    pub const fn amount_recovered(&self) -> u32 {
        self.before.current().saturating_sub(self.after.current())
    }

    #[inline]
    pub const fn previous_stage(&self) -> StressStage {
        self.before.stage()
    }

    #[inline]
    pub const fn new_stage(&self) -> StressStage {
        self.after.stage()
    }

    pub fn stage_improved(&self) -> bool {
        self.new_stage() < self.previous_stage()
    }

    pub fn fully_recovered(&self) -> bool {
        self.after.current() == StressState::MIN
    }
}

impl fmt::Display for StressRecoveryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rest {
            Some(rest) => write!(
                f,
                "{} -> {} ({} rest, -{})",
                self.before.current(),
                self.after.current(),
                rest,
                self.amount_recovered()
            ),
            None => write!(
                f,
                "{} -> {} (-{})",
                self.before.current(),
                self.after.current(),
                self.amount_recovered()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_amounts_scale_with_will() {
        let tuning = StressTuning::STANDARD;

        // Will 4: short 4×2 = 8, long 4×5 = 20.
        assert_eq!(tuning.recovery_amount(RestType::Short, 4), 8);
        assert_eq!(tuning.recovery_amount(RestType::Long, 4), 20);
        // Milestone ignores Will.
        assert_eq!(tuning.recovery_amount(RestType::Milestone, 4), 25);
        assert_eq!(tuning.recovery_amount(RestType::Milestone, 1), 25);
        // Sanctuary covers the whole track.
        assert_eq!(tuning.recovery_amount(RestType::Sanctuary, 1), 100);
    }

    #[test]
    fn negative_will_recovers_nothing() {
        let tuning = StressTuning::STANDARD;
        assert_eq!(tuning.recovery_amount(RestType::Short, -3), 0);
        assert_eq!(tuning.recovery_amount(RestType::Long, 0), 0);
    }

    #[test]
    fn short_rest_reduces_and_records() {
        let tuning = StressTuning::STANDARD;
        let (state, result) = tuning.recover(StressState::new(45), RestType::Short, 4);

        // 45 - 8 = 37
        assert_eq!(state.current(), 37);
        assert_eq!(result.amount_recovered(), 8);
        assert_eq!(result.rest(), Some(RestType::Short));
        assert!(result.stage_improved());
    }

    #[test]
    fn sanctuary_clears_the_track_from_anywhere() {
        let tuning = StressTuning::STANDARD;
        let (state, result) = tuning.recover(StressState::new(97), RestType::Sanctuary, 1);

        assert_eq!(state.current(), 0);
        assert!(result.fully_recovered());
        assert_eq!(result.amount_recovered(), 97);
    }

    #[test]
    fn recovery_saturates_at_zero() {
        let tuning = StressTuning::STANDARD;
        let (state, result) = tuning.recover(StressState::new(10), RestType::Long, 4);

        assert_eq!(state.current(), 0);
        // Only 10 of the 20 were there to shed.
        assert_eq!(result.amount_recovered(), 10);
    }

    #[test]
    fn trauma_resets_depend_on_the_outcome() {
        let tuning = StressTuning::STANDARD;

        let (passed, result) = tuning.resolve_trauma_check(StressState::new(100), true);
        assert_eq!(passed.current(), 75);
        assert_eq!(result.amount_recovered(), 25);
        assert_eq!(result.rest(), None);
        assert!(!passed.requires_trauma_check());

        let (failed, _) = tuning.resolve_trauma_check(StressState::new(100), false);
        assert_eq!(failed.current(), 50);
    }

    #[test]
    fn trauma_reset_can_move_stress_up() {
        let tuning = StressTuning::STANDARD;
        let (state, result) = tuning.resolve_trauma_check(StressState::new(40), true);

        assert_eq!(state.current(), 75);
        // Nothing was shed; the reset replaced the value.
        assert_eq!(result.amount_recovered(), 0);
        assert!(!result.stage_improved());
    }

    #[test]
    fn flat_recovery_needs_no_rest() {
        let (state, result) = recover_stress(StressState::new(60), 15);

        assert_eq!(state.current(), 45);
        assert_eq!(result.rest(), None);
        assert_eq!(result.amount_recovered(), 15);
        assert!(result.stage_improved());
    }

    #[test]
    fn out_of_track_resets_are_rejected() {
        assert!(StressTuning::new(2, 5, 25, 101, 50).is_err());
        assert!(StressTuning::new(2, 5, 25, 75, 200).is_err());
        assert!(StressTuning::new(2, 5, 25, 75, 50).is_ok());
    }

    #[test]
    fn display_names_the_rest_taken() {
        let tuning = StressTuning::STANDARD;
        let (_, rested) = tuning.recover(StressState::new(45), RestType::Short, 4);
        assert_eq!(rested.to_string(), "45 -> 37 (short rest, -8)");

        let (_, flat) = recover_stress(StressState::new(60), 15);
        assert_eq!(flat.to_string(), "60 -> 45 (-15)");
    }
}
