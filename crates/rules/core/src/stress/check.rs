//! Willpower resistance against incoming stress.
//!
//! The dice are rolled elsewhere; this module only maps a net success count
//! onto the reduction table and applies it. Keeping the roll outside the
//! kernel keeps every function here deterministic.

use std::fmt;

/// Outcome of a resistance check: net successes against a base amount.
///
/// ```text
/// successes  resisted
///     0         0%
///     1        50%
///    2-3       75%
///    4+       100%
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistanceCheck {
    successes: u32,
    base_amount: u32,
}

impl ResistanceCheck {
    pub const fn new(successes: u32, base_amount: u32) -> Self {
        Self {
            successes,
            base_amount,
        }
    }

    #[inline]
    pub const fn successes(self) -> u32 {
        self.successes
    }

    #[inline]
    pub const fn base_amount(self) -> u32 {
        self.base_amount
    }

    /// Percentage of the base amount resisted.
    pub const fn reduction_percent(self) -> u32 {
        match self.successes {
            0 => 0,
            1 => 50,
            2 | 3 => 75,
            _ => 100,
        }
    }

    /// Stress that actually lands after resistance.
    ///
    /// The resisted share truncates downward, so partial resistance always
    /// rounds in the sufferer's disfavor: 25 at 50% resists 12 and lands 13.
    pub const fn reduced_amount(self) -> u32 {
        // Widen before the multiply; the result fits because the resisted
        // share never exceeds the base.
        let resisted = (self.base_amount as u64 * self.reduction_percent() as u64 / 100) as u32;
        self.base_amount - resisted
    }

    #[inline]
    pub const fn was_resisted(self) -> bool {
        self.reduction_percent() > 0
    }
}

impl fmt::Display for ResistanceCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} successes: {} -> {} ({}% resisted)",
            self.successes,
            self.base_amount,
            self.reduced_amount(),
            self.reduction_percent()
        )
    }
}
