//! Error types for the rules kernel.
//!
//! Every fallible operation in this crate returns [`RulesResult`]. Errors are
//! split into exactly two classifications so callers can route them without
//! string matching:
//!
//! - [`RulesError::InvalidInput`]: the caller handed us malformed data. A
//!   blank identifier, a cost curve with holes, a formula that scales an
//!   attribute the caller never supplied. These are bugs in content tables or
//!   in the calling layer and should surface loudly during development.
//!
//! - [`RulesError::InvalidOperation`]: the data was fine but the requested
//!   state transition is not legal from here. Advancing a proficiency that is
//!   already at the ceiling, granting zero experience, editing attributes
//!   while a recommended build is locked in.
//!
//! Soft fallbacks are deliberately not errors: looking up an archetype with
//! no bonus entry yields the neutral value, and affordability checks simply
//! answer `false`. Only genuinely malformed inputs and illegal transitions
//! reach this module.

use crate::attributes::Attribute;
use crate::proficiency::WeaponCategory;
use crate::stats::DerivedStat;

/// Convenience alias used by every fallible operation in the crate.
pub type RulesResult<T> = Result<T, RulesError>;

// ============================================================================
// Top-Level Error
// ============================================================================

/// Unified error type for the rules kernel.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Malformed data was supplied by the caller or a content table.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The requested transition is not legal from the current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] OperationError),
}

impl RulesError {
    /// Classification of this error, independent of its payload.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::InvalidOperation(_) => ErrorKind::InvalidOperation,
        }
    }

    #[inline]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    #[inline]
    pub const fn is_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

/// Coarse error classification for logging and dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidOperation,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::InvalidOperation => "invalid_operation",
        }
    }
}

// ============================================================================
// Input Errors
// ============================================================================

/// Malformed data handed to a constructor or evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// An identifier was empty or all whitespace.
    #[error("{what} must not be blank")]
    BlankIdentifier { what: &'static str },

    /// A name did not match any known variant.
    #[error("unknown {what}: {name:?}")]
    UnknownName { what: &'static str, name: String },

    /// A cost curve was declared with an inverted value range.
    #[error("cost curve bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: i32, max: i32 },

    /// A cost curve range is wider than the supported step capacity.
    #[error("cost curve spans {steps} steps but at most {max} are supported")]
    CurveTooLarge { steps: usize, max: usize },

    /// A cost curve did not supply one step per value in its range.
    #[error("cost curve needs {expected} steps to cover its range, got {found}")]
    WrongStepCount { expected: usize, found: usize },

    /// A cost curve step targets the wrong value for its position.
    #[error("cost curve steps must rise one value at a time: expected {expected}, got {found}")]
    MisorderedStep { expected: i32, found: i32 },

    /// Every step of a cost curve must cost at least one point.
    #[error("raising a value to {value} must cost at least 1 point, got {cost}")]
    NonPositiveStepCost { value: i32, cost: i32 },

    /// Point pools cannot be negative.
    #[error("point pool must not be negative, got {points}")]
    NegativePool { points: i32 },

    /// A formula listed the same attribute in two scaling terms.
    #[error("{stat} scales {attribute} more than once")]
    DuplicateScaling { stat: DerivedStat, attribute: Attribute },

    /// A formula needed an attribute the caller did not supply.
    #[error("{stat} scales with {attribute}, but no value for {attribute} was given")]
    MissingAttribute { stat: DerivedStat, attribute: Attribute },

    /// A formula catalog listed the same derived stat twice.
    #[error("catalog already contains a formula for {stat}")]
    DuplicateFormula { stat: DerivedStat },

    /// A formula catalog must cover every derived stat.
    #[error("catalog is missing a formula for {stat}")]
    MissingFormula { stat: DerivedStat },

    /// Advancement thresholds must be positive and strictly ascending.
    #[error(
        "advancement thresholds must be positive and strictly ascending, \
         got {to_proficient}/{to_expert}/{to_master}"
    )]
    MalformedThresholds {
        to_proficient: u32,
        to_expert: u32,
        to_master: u32,
    },

    /// An archetype proficiency set must grant at least one category.
    #[error("archetype {archetype} grants no proficient weapon categories")]
    EmptyProficiencySet { archetype: String },

    /// Trauma reset values must stay inside the stress track.
    #[error("trauma reset value {value} exceeds the stress maximum {max}")]
    ResetAboveMaximum { value: u32, max: u32 },

    /// A panic roll must come from a ten-sided die.
    #[error("panic roll {roll} is outside the d10 range 1..=10")]
    PanicRollOutOfRange { roll: u32 },
}

// ============================================================================
// Operation Errors
// ============================================================================

/// A transition that is not legal from the current state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    /// Master is terminal; there is no further tier to advance into.
    #[error("{category} is already at the highest proficiency tier")]
    AlreadyAtMaster { category: WeaponCategory },

    /// Experience grants must be positive.
    #[error("experience gain must be at least 1")]
    ZeroExperienceGain,

    /// Recommended builds lock attribute values until the caller switches
    /// to manual allocation.
    #[error("attributes are locked while a recommended build is selected")]
    AllocationLocked,
}
