//! Attribute allocation during character creation.
//!
//! Allocation runs in one of two modes. Simple mode locks in a recommended
//! build for an archetype and treats the whole pool as spent. Advanced mode
//! starts every attribute at the floor and lets the caller adjust values one
//! at a time, carrying the point delta the cost curve computed for the move.
//!
//! This type is pure bookkeeping: affordability and cost questions belong to
//! [`PointBuyConfig`](crate::pointbuy::PointBuyConfig).

use std::fmt;

use crate::attributes::{Attribute, AttributeSet};
use crate::error::{InputError, OperationError, RulesResult};
use crate::ids::ArchetypeId;

/// How the player is assigning attribute points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AllocationMode {
    /// A recommended build was picked; attribute values are locked.
    Simple,
    /// Manual point-buy; attributes may be adjusted freely.
    Advanced,
}

/// Snapshot of an in-progress attribute allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationState {
    mode: AllocationMode,
    attributes: AttributeSet,
    points_spent: i32,
    points_remaining: i32,
    total_points: i32,
    archetype: Option<ArchetypeId>,
}

impl AllocationState {
    /// Fresh manual allocation: every attribute at the floor, full pool
    /// remaining.
    pub fn advanced(total_points: i32) -> RulesResult<Self> {
        if total_points < 0 {
            return Err(InputError::NegativePool {
                points: total_points,
            }
            .into());
        }
        Ok(Self {
            mode: AllocationMode::Advanced,
            attributes: AttributeSet::default(),
            points_spent: 0,
            points_remaining: total_points,
            total_points,
            archetype: None,
        })
    }

    /// Locked-in recommended build for an archetype.
    ///
    /// Recommended builds consume the whole pool by definition, regardless
    /// of what the values would cost under manual point-buy.
    pub fn from_recommended_build(
        archetype: ArchetypeId,
        attributes: AttributeSet,
        total_points: i32,
    ) -> RulesResult<Self> {
        if total_points < 0 {
            return Err(InputError::NegativePool {
                points: total_points,
            }
            .into());
        }
        Ok(Self {
            mode: AllocationMode::Simple,
            attributes,
            points_spent: total_points,
            points_remaining: 0,
            total_points,
            archetype: Some(archetype),
        })
    }

    #[inline]
    pub const fn mode(&self) -> AllocationMode {
        self.mode
    }

    #[inline]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    #[inline]
    pub const fn points_spent(&self) -> i32 {
        self.points_spent
    }

    #[inline]
    pub const fn points_remaining(&self) -> i32 {
        self.points_remaining
    }

    #[inline]
    pub const fn total_points(&self) -> i32 {
        self.total_points
    }

    pub const fn archetype(&self) -> Option<&ArchetypeId> {
        self.archetype.as_ref()
    }

    /// Whether the pool has been fully spent.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.points_remaining == 0
    }

    /// Whether individual attribute edits are allowed in the current mode.
    #[inline]
    pub const fn allows_manual_adjustment(&self) -> bool {
        matches!(self.mode, AllocationMode::Advanced)
    }

    /// Applies a single attribute change together with the point delta the
    /// cost curve computed for it. Negative deltas are refunds.
    ///
    /// Rejected in simple mode: recommended builds stay locked until the
    /// caller switches to advanced.
    pub fn with_attribute(
        &self,
        attribute: Attribute,
        new_value: i32,
        point_delta: i32,
    ) -> RulesResult<Self> {
        if !self.allows_manual_adjustment() {
            return Err(OperationError::AllocationLocked.into());
        }
        Ok(Self {
            mode: self.mode,
            attributes: self.attributes.with_value(attribute, new_value),
            points_spent: self.points_spent + point_delta,
            points_remaining: self.points_remaining - point_delta,
            total_points: self.total_points,
            archetype: self.archetype.clone(),
        })
    }

    /// Unlocks a recommended build for manual editing.
    ///
    /// The attribute values carry over; `points_spent` is the real cost of
    /// those values under the curve, which the caller computes, so remaining
    /// points become meaningful again. The archetype link is dropped since
    /// the build no longer matches the recommendation.
    #[must_use]
    pub fn switch_to_advanced(&self, points_spent: i32) -> Self {
        Self {
            mode: AllocationMode::Advanced,
            attributes: self.attributes,
            points_spent,
            points_remaining: self.total_points - points_spent,
            total_points: self.total_points,
            archetype: None,
        }
    }
}

impl fmt::Display for AllocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}/{} remaining)",
            self.mode, self.attributes, self.points_remaining, self.total_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advanced_allocation_starts_at_the_floor() {
        let state = AllocationState::advanced(15).unwrap();

        assert_eq!(state.mode(), AllocationMode::Advanced);
        assert_eq!(state.points_spent(), 0);
        assert_eq!(state.points_remaining(), 15);
        assert!(!state.is_complete());
        assert!(state.allows_manual_adjustment());
        assert_eq!(state.archetype(), None);
        for attribute in Attribute::all() {
            assert_eq!(state.attributes().get(attribute), 1);
        }
    }

    #[test]
    fn recommended_build_consumes_the_whole_pool() {
        let warrior = ArchetypeId::new("warrior").unwrap();
        let build = AttributeSet::new(4, 3, 2, 2, 4);
        let state = AllocationState::from_recommended_build(warrior.clone(), build, 15).unwrap();

        assert_eq!(state.mode(), AllocationMode::Simple);
        assert_eq!(state.points_spent(), 15);
        assert_eq!(state.points_remaining(), 0);
        assert!(state.is_complete());
        assert!(!state.allows_manual_adjustment());
        assert_eq!(state.archetype(), Some(&warrior));
    }

    #[test]
    fn manual_edits_track_spend_and_refunds() {
        let state = AllocationState::advanced(15).unwrap();

        // Raise Might 1 -> 4: the curve says that costs 3.
        let raised = state.with_attribute(Attribute::Might, 4, 3).unwrap();
        assert_eq!(raised.attributes().get(Attribute::Might), 4);
        assert_eq!(raised.points_spent(), 3);
        assert_eq!(raised.points_remaining(), 12);

        // Drop Might back to 2: a 2-point refund.
        let lowered = raised.with_attribute(Attribute::Might, 2, -2).unwrap();
        assert_eq!(lowered.attributes().get(Attribute::Might), 2);
        assert_eq!(lowered.points_spent(), 1);
        assert_eq!(lowered.points_remaining(), 14);
    }

    #[test]
    fn simple_mode_rejects_manual_edits() {
        let adept = ArchetypeId::new("adept").unwrap();
        let build = AttributeSet::new(3, 3, 3, 2, 3);
        let state = AllocationState::from_recommended_build(adept, build, 14).unwrap();

        let err = state.with_attribute(Attribute::Will, 4, 2).unwrap_err();
        assert!(err.is_operation());
    }

    #[test]
    fn switching_to_advanced_recovers_unspent_points() {
        let warrior = ArchetypeId::new("warrior").unwrap();
        let build = AttributeSet::new(4, 3, 2, 2, 4);
        let locked = AllocationState::from_recommended_build(warrior, build, 15).unwrap();

        // Under the standard curve this build really costs 3+2+1+1+3 = 10.
        let unlocked = locked.switch_to_advanced(10);

        assert_eq!(unlocked.mode(), AllocationMode::Advanced);
        assert_eq!(unlocked.attributes(), locked.attributes());
        assert_eq!(unlocked.points_spent(), 10);
        assert_eq!(unlocked.points_remaining(), 5);
        assert_eq!(unlocked.archetype(), None);
        assert!(unlocked.allows_manual_adjustment());
    }

    #[test]
    fn negative_pools_are_rejected() {
        assert!(AllocationState::advanced(-1).is_err());
    }

    #[test]
    fn display_summarizes_mode_values_and_pool() {
        let state = AllocationState::advanced(15).unwrap();
        assert_eq!(
            state.to_string(),
            "[advanced] M:1 F:1 Wi:1 Wl:1 S:1 (15/15 remaining)"
        );
    }
}
