//! The six stress stages over the 0..=100 track.
//!
//! Stage boundaries sit every 20 points. Each stage owns the half-open band
//! starting at its breakpoint; Trauma alone is just the point 100.
//!
//! ```text
//! calm      [ 0, 20)
//! uneasy    [20, 40)
//! anxious   [40, 60)
//! panicked  [60, 80)
//! breaking  [80, 100)
//! trauma    {100}
//! ```

/// Stage of the stress track. Ordered, so `Panicked > Anxious`.
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
pub enum StressStage {
    Calm,
    Uneasy,
    Anxious,
    Panicked,
    Breaking,
    Trauma,
}

impl StressStage {
    /// Number of stages.
    pub const COUNT: usize = 6;

    /// All stages from lowest to highest.
    pub const fn all() -> [StressStage; Self::COUNT] {
        [
            StressStage::Calm,
            StressStage::Uneasy,
            StressStage::Anxious,
            StressStage::Panicked,
            StressStage::Breaking,
            StressStage::Trauma,
        ]
    }

    /// Stable index for array-backed storage.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Lowest stress value inside each stage.
    pub const BREAKPOINTS: [u32; Self::COUNT] = [0, 20, 40, 60, 80, 100];

    /// Stage owning a stress value. Values past 100 clamp into Trauma.
    pub const fn of(stress: u32) -> StressStage {
        match stress {
            0..=19 => StressStage::Calm,
            20..=39 => StressStage::Uneasy,
            40..=59 => StressStage::Anxious,
            60..=79 => StressStage::Panicked,
            80..=99 => StressStage::Breaking,
            _ => StressStage::Trauma,
        }
    }

    /// Lowest stress value that maps to this stage.
    #[inline]
    pub const fn floor(self) -> u32 {
        Self::BREAKPOINTS[self.as_index()]
    }

    /// Stages below Panicked recover through ordinary rest alone.
    #[inline]
    pub const fn is_recoverable(self) -> bool {
        (self as u8) < (StressStage::Panicked as u8)
    }
}
