//! Clamped stress value with its derived penalties.

use std::fmt;

use crate::stress::stage::StressStage;

/// A stress value on the 0..=100 track.
///
/// Construction clamps, so an out-of-range value cannot exist. The derived
/// queries (stage, defense penalty, disadvantage, trauma flag) are all pure
/// functions of the single stored value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressState {
    current: u32,
}

impl StressState {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 100;

    /// Stress per point of defense penalty: one point lost per full stage.
    pub const POINTS_PER_PENALTY: u32 = 20;

    /// Stress at or above this imposes disadvantage on skill checks.
    pub const SKILL_DISADVANTAGE_AT: u32 = 80;

    /// Builds a state, clamping anything past the track's end down to 100.
    pub const fn new(stress: u32) -> Self {
        let current = if stress > Self::MAX { Self::MAX } else { stress };
        Self { current }
    }

    pub const fn calm() -> Self {
        Self::new(Self::MIN)
    }

    #[inline]
    pub const fn current(self) -> u32 {
        self.current
    }

    #[inline]
    pub const fn stage(self) -> StressStage {
        StressStage::of(self.current)
    }

    /// Flat defense penalty: 1 point per full 20 stress, so 0 through 5.
    #[inline]
    pub const fn defense_penalty(self) -> u32 {
        self.current / Self::POINTS_PER_PENALTY
    }

    /// Disadvantage on skill checks from Breaking onward.
    #[inline]
    pub const fn has_skill_disadvantage(self) -> bool {
        self.current >= Self::SKILL_DISADVANTAGE_AT
    }

    /// At the top of the track a trauma check is due. Level-triggered:
    /// true for as long as the value sits at 100.
    #[inline]
    pub const fn requires_trauma_check(self) -> bool {
        self.current >= Self::MAX
    }

    #[inline]
    pub const fn is_calm(self) -> bool {
        matches!(self.stage(), StressStage::Calm)
    }

    /// Adds stress, saturating at the track's end.
    #[must_use]
    pub const fn with_added(self, amount: u32) -> Self {
        Self::new(self.current.saturating_add(amount))
    }

    /// Removes stress, stopping at zero.
    #[must_use]
    pub const fn with_reduced(self, amount: u32) -> Self {
        Self::new(self.current.saturating_sub(amount))
    }
}

impl Default for StressState {
    fn default() -> Self {
        Self::calm()
    }
}

impl fmt::Display for StressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stress {}/{} [{}] (def -{})",
            self.current,
            Self::MAX,
            self.stage(),
            self.defense_penalty()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_to_the_track() {
        assert_eq!(StressState::new(45).current(), 45);
        assert_eq!(StressState::new(100).current(), 100);
        assert_eq!(StressState::new(250).current(), 100);
        assert_eq!(StressState::calm().current(), 0);
        assert_eq!(StressState::default(), StressState::calm());
    }

    #[test]
    fn defense_penalty_steps_every_twenty_points() {
        assert_eq!(StressState::new(0).defense_penalty(), 0);
        assert_eq!(StressState::new(19).defense_penalty(), 0);
        assert_eq!(StressState::new(20).defense_penalty(), 1);
        assert_eq!(StressState::new(45).defense_penalty(), 2);
        assert_eq!(StressState::new(79).defense_penalty(), 3);
        assert_eq!(StressState::new(80).defense_penalty(), 4);
        assert_eq!(StressState::new(100).defense_penalty(), 5);
    }

    #[test]
    fn skill_disadvantage_starts_at_breaking() {
        assert!(!StressState::new(79).has_skill_disadvantage());
        assert!(StressState::new(80).has_skill_disadvantage());
        assert!(StressState::new(100).has_skill_disadvantage());
    }

    #[test]
    fn trauma_flag_is_level_triggered_at_the_top() {
        assert!(!StressState::new(99).requires_trauma_check());
        assert!(StressState::new(100).requires_trauma_check());
        // Still true however the value got there or stays there.
        assert!(StressState::new(100).with_added(0).requires_trauma_check());
    }

    #[test]
    fn arithmetic_saturates_at_both_ends() {
        let high = StressState::new(90).with_added(30);
        assert_eq!(high.current(), 100);

        let low = StressState::new(10).with_reduced(25);
        assert_eq!(low.current(), 0);
    }

    #[test]
    fn stage_tracks_the_current_value() {
        assert_eq!(StressState::new(0).stage(), StressStage::Calm);
        assert_eq!(StressState::new(45).stage(), StressStage::Anxious);
        assert_eq!(StressState::new(100).stage(), StressStage::Trauma);
        assert!(StressState::new(5).is_calm());
        assert!(!StressState::new(25).is_calm());
    }

    #[test]
    fn display_shows_value_stage_and_penalty() {
        assert_eq!(
            StressState::new(45).to_string(),
            "stress 45/100 [anxious] (def -2)"
        );
    }
}
