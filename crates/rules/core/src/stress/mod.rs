//! The stress track: six stages over 0..=100, application, resistance,
//! recovery, and the panic table.
//!
//! ```text
//! calm ──> uneasy ──> anxious ──> panicked ──> breaking ──> trauma
//!  0        20          40          60    │      80    │     100
//!                                         │            │
//!                                   panic table    breakdown
//! ```
//!
//! All dice stay outside: resistance checks and panic rolls arrive here
//! already resolved, so everything in this module is a pure function of its
//! inputs.

pub mod check;
pub mod reaction;
pub mod recovery;
pub mod stage;
pub mod state;
pub mod transition;

// Re-export primary types
pub use check::ResistanceCheck;
pub use reaction::{Afflictions, ForcedAction, PanicReaction};
pub use recovery::{RestType, StressRecoveryResult, StressTuning, recover_stress};
pub use stage::StressStage;
pub use state::StressState;
pub use transition::{
    StressApplicationResult, StressSource, apply_resisted_stress, apply_stress,
};
