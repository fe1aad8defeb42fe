//! Per-category advancement tracking.
//!
//! Experience counts from zero within the current tier and resets on every
//! advancement. Crossing a threshold never advances anything by itself;
//! [`ProficiencyProgress::advanced`] is the only way up, so the advancement
//! moment stays a deliberate table event rather than a numeric side effect.

use std::fmt;

use crate::error::{OperationError, RulesResult};
use crate::proficiency::category::WeaponCategory;
use crate::proficiency::tier::{AdvancementThresholds, ProficiencyTier};

/// Advancement state of one weapon category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProficiencyProgress {
    category: WeaponCategory,
    tier: ProficiencyTier,
    experience: u32,
    thresholds: AdvancementThresholds,
}

impl ProficiencyProgress {
    pub const fn new(
        category: WeaponCategory,
        tier: ProficiencyTier,
        experience: u32,
        thresholds: AdvancementThresholds,
    ) -> Self {
        Self {
            category,
            tier,
            experience,
            thresholds,
        }
    }

    /// Zero experience at the given tier.
    pub const fn fresh(
        category: WeaponCategory,
        tier: ProficiencyTier,
        thresholds: AdvancementThresholds,
    ) -> Self {
        Self::new(category, tier, 0, thresholds)
    }

    #[inline]
    pub const fn category(&self) -> WeaponCategory {
        self.category
    }

    #[inline]
    pub const fn tier(&self) -> ProficiencyTier {
        self.tier
    }

    #[inline]
    pub const fn experience(&self) -> u32 {
        self.experience
    }

    #[inline]
    pub const fn thresholds(&self) -> AdvancementThresholds {
        self.thresholds
    }

    #[inline]
    pub const fn is_at_max(&self) -> bool {
        self.tier.is_max()
    }

    /// Threshold to leave the current tier. `None` at Master.
    pub const fn threshold_for_next(&self) -> Option<u32> {
        self.thresholds.for_next(self.tier)
    }

    /// Experience still missing for the next tier, clamped at 0 once the
    /// threshold is met. 0 at Master.
    pub fn experience_to_next(&self) -> u32 {
        match self.threshold_for_next() {
            Some(threshold) => threshold.saturating_sub(self.experience),
            None => 0,
        }
    }

    /// Progress toward the next tier as a whole percentage, capped at 100.
    /// Master always reports 100.
    pub fn progress_percent(&self) -> u32 {
        match self.threshold_for_next() {
            // Widen before the multiply; banked experience is unbounded.
            Some(threshold) => {
                (u64::from(self.experience) * 100 / u64::from(threshold)).min(100) as u32
            }
            None => 100,
        }
    }

    /// Whether enough experience is banked to advance. Always `false` at
    /// Master, however much experience accumulates there.
    pub fn has_reached_threshold(&self) -> bool {
        match self.threshold_for_next() {
            Some(threshold) => self.experience >= threshold,
            None => false,
        }
    }

    /// Adds combat experience. The gain must be positive.
    ///
    /// Experience keeps accumulating past the threshold and even at Master;
    /// only advancement consumes it.
    pub fn with_experience(&self, amount: u32) -> RulesResult<Self> {
        if amount == 0 {
            return Err(OperationError::ZeroExperienceGain.into());
        }
        Ok(Self {
            experience: self.experience.saturating_add(amount),
            ..*self
        })
    }

    /// Steps up one tier and resets experience to zero.
    pub fn advanced(&self) -> RulesResult<Self> {
        match self.tier.next() {
            Some(next) => Ok(Self {
                tier: next,
                experience: 0,
                ..*self
            }),
            None => Err(OperationError::AlreadyAtMaster {
                category: self.category,
            }
            .into()),
        }
    }
}

impl fmt::Display for ProficiencyProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.threshold_for_next(), self.tier.next()) {
            (Some(threshold), Some(next)) => write!(
                f,
                "{}: {} ({}/{} to {})",
                self.category, self.tier, self.experience, threshold, next
            ),
            _ => write!(f, "{}: {} (max)", self.category, self.tier),
        }
    }
}
