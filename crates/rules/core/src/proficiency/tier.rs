//! Proficiency tiers and the experience thresholds between them.

use crate::error::{InputError, RulesResult};

/// The four-rung proficiency ladder. Ordered, so `Expert > Proficient`.
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
pub enum ProficiencyTier {
    NonProficient,
    Proficient,
    Expert,
    Master,
}

impl ProficiencyTier {
    /// Number of tiers.
    pub const COUNT: usize = 4;

    /// All tiers from lowest to highest.
    pub const fn all() -> [ProficiencyTier; Self::COUNT] {
        [
            ProficiencyTier::NonProficient,
            ProficiencyTier::Proficient,
            ProficiencyTier::Expert,
            ProficiencyTier::Master,
        ]
    }

    /// Stable index for array-backed storage.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// The next rung up, or `None` at the top.
    pub const fn next(self) -> Option<ProficiencyTier> {
        match self {
            ProficiencyTier::NonProficient => Some(ProficiencyTier::Proficient),
            ProficiencyTier::Proficient => Some(ProficiencyTier::Expert),
            ProficiencyTier::Expert => Some(ProficiencyTier::Master),
            ProficiencyTier::Master => None,
        }
    }

    /// Master is terminal.
    #[inline]
    pub const fn is_max(self) -> bool {
        matches!(self, ProficiencyTier::Master)
    }
}

/// Experience required to *enter* each tier above the bottom.
///
/// Experience counts from zero within the current tier, so each threshold
/// reads "points needed inside the previous tier", not a lifetime total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancementThresholds {
    to_proficient: u32,
    to_expert: u32,
    to_master: u32,
}

impl AdvancementThresholds {
    /// The shipped ladder: 10 to Proficient, 25 to Expert, 50 to Master.
    pub const STANDARD: Self = Self {
        to_proficient: 10,
        to_expert: 25,
        to_master: 50,
    };

    /// Thresholds must be positive and strictly ascending.
    pub fn new(to_proficient: u32, to_expert: u32, to_master: u32) -> RulesResult<Self> {
        if to_proficient == 0 || to_expert <= to_proficient || to_master <= to_expert {
            return Err(InputError::MalformedThresholds {
                to_proficient,
                to_expert,
                to_master,
            }
            .into());
        }
        Ok(Self {
            to_proficient,
            to_expert,
            to_master,
        })
    }

    /// Experience needed to enter `tier` from the tier below it.
    /// `None` for the bottom rung, which needs nothing.
    pub const fn threshold_to(self, tier: ProficiencyTier) -> Option<u32> {
        match tier {
            ProficiencyTier::NonProficient => None,
            ProficiencyTier::Proficient => Some(self.to_proficient),
            ProficiencyTier::Expert => Some(self.to_expert),
            ProficiencyTier::Master => Some(self.to_master),
        }
    }

    /// Experience needed to leave `current` upward. `None` at Master.
    pub const fn for_next(self, current: ProficiencyTier) -> Option<u32> {
        match current.next() {
            Some(next) => self.threshold_to(next),
            None => None,
        }
    }
}

impl Default for AdvancementThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}
