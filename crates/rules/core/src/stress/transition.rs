//! Stress application and the transition record it produces.
//!
//! Every stress change yields a [`StressApplicationResult`] describing the
//! before and after states. All the interesting flags are edge-triggered on
//! the stage boundary crossings, with one deliberate exception: the trauma
//! flag is level-triggered, so stress arriving while already at 100 keeps
//! demanding a trauma check even though no boundary was crossed.
//!
//! Critical transitions are the two crossings the table must stop for:
//! entering Panicked from below (roll on the panic table) and entering
//! Breaking or Trauma from below (a breakdown). Recovery never raises
//! either flag, whatever stages it passes through on the way down.

use std::fmt;

use crate::stress::check::ResistanceCheck;
use crate::stress::stage::StressStage;
use crate::stress::state::StressState;

/// Where a stress hit came from. Flavor for logs and history, never
/// mechanics: every source applies identically.
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
pub enum StressSource {
    Combat,
    Exploration,
    Narrative,
    Heretical,
    Environmental,
    Corruption,
}

/// Record of one stress change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressApplicationResult {
    before: StressState,
    after: StressState,
    source: StressSource,
    resistance: Option<ResistanceCheck>,
}

impl StressApplicationResult {
    /// Builds a record from raw stress values, clamping both onto the track.
    pub const fn new(
        previous_stress: u32,
        new_stress: u32,
        source: StressSource,
        resistance: Option<ResistanceCheck>,
    ) -> Self {
        Self {
            before: StressState::new(previous_stress),
            after: StressState::new(new_stress),
            source,
            resistance,
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
    pub const fn source(&self) -> StressSource {
        self.source
    }

    #[inline]
    pub const fn resistance(&self) -> Option<ResistanceCheck> {
        self.resistance
    }

    #[inline]
    pub const fn previous_stage(&self) -> StressStage {
        self.before.stage()
    }

    #[inline]
    pub const fn new_stage(&self) -> StressStage {
        self.after.stage()
    }

    /// Net change in stored stress. Negative when this records a reduction,
    /// and smaller than the raw hit when clamping ate part of it.
    pub const fn stress_gained(&self) -> i32 {
        self.after.current() as i32 - self.before.current() as i32
    }

    pub fn was_resisted(&self) -> bool {
        self.resistance.is_some_and(ResistanceCheck::was_resisted)
    }

    /// Whether the change landed in a different stage.
    pub fn stage_changed(&self) -> bool {
        self.previous_stage() != self.new_stage()
    }

    pub fn stage_worsened(&self) -> bool {
        self.new_stage() > self.previous_stage()
    }

    pub fn stage_improved(&self) -> bool {
        self.new_stage() < self.previous_stage()
    }

    /// Crossed up into Panicked: time to roll on the panic table.
    pub fn entered_panic(&self) -> bool {
        self.new_stage() == StressStage::Panicked
            && self.previous_stage() < StressStage::Panicked
    }

    /// Crossed up into Breaking or Trauma: a breakdown.
    pub fn entered_breakdown(&self) -> bool {
        self.new_stage() >= StressStage::Breaking
            && self.previous_stage() < StressStage::Breaking
    }

    /// Either of the two crossings the table must stop for.
    pub fn is_critical_transition(&self) -> bool {
        self.entered_panic() || self.entered_breakdown()
    }

    /// A trauma check is due. Level-triggered on the end state: stress
    /// landing on 100 keeps this raised even if it was already there.
    pub const fn trauma_check_triggered(&self) -> bool {
        self.after.requires_trauma_check()
    }

    /// How much the flat defense penalty moved, signed.
    pub const fn defense_penalty_change(&self) -> i32 {
        self.after.defense_penalty() as i32 - self.before.defense_penalty() as i32
    }
}

impl fmt::Display for StressApplicationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} [{}] ({} -> {})",
            self.before.current(),
            self.after.current(),
            self.source,
            self.previous_stage(),
            self.new_stage()
        )?;
        if self.is_critical_transition() {
            write!(f, " critical")?;
        }
        if self.trauma_check_triggered() {
            write!(f, " trauma-check")?;
        }
        Ok(())
    }
}

// ============================================================================
// Application
// ============================================================================

/// Applies unresisted stress.
///
/// Zero is a legal amount and simply records a no-op transition.
pub fn apply_stress(
    state: StressState,
    amount: u32,
    source: StressSource,
) -> (StressState, StressApplicationResult) {
    let after = state.with_added(amount);
    let result = StressApplicationResult::new(state.current(), after.current(), source, None);
    (after, result)
}

/// Applies stress through a resolved resistance check. The amount that
/// lands comes from the check's reduction table.
pub fn apply_resisted_stress(
    state: StressState,
    check: ResistanceCheck,
    source: StressSource,
) -> (StressState, StressApplicationResult) {
    let after = state.with_added(check.reduced_amount());
    let result =
        StressApplicationResult::new(state.current(), after.current(), source, Some(check));
    (after, result)
}
