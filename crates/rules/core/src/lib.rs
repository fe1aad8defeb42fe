//! # rules-core
//!
//! Deterministic rules kernel for a tabletop campaign: character creation
//! point-buy, derived-stat formulas, weapon proficiency advancement, and the
//! stress track.
//!
//! ## Design
//!
//! - **Pure and deterministic**: no I/O, no clocks, no floating point, and
//!   no dice. Rolls resolve outside and arrive here as plain numbers, so
//!   identical inputs give identical outputs on every machine.
//! - **Immutable values**: state types are cheap value objects; transitions
//!   return new values and leave the old ones intact.
//! - **Validated at the boundary**: constructors reject malformed tables
//!   once, and everything downstream relies on the invariants they enforce.
//! - **Open content, closed mechanics**: archetypes and lineages are string
//!   keys content can extend freely; attributes, stats, tiers, and stages
//!   are closed enums the mechanics can be total over.
//!
//! ## Modules
//!
//! - [`pointbuy`]: tiered cost curves, point pools, allocation bookkeeping
//! - [`stats`]: derived-stat formulas and the catalog evaluating them
//! - [`proficiency`]: weapon tiers, experience thresholds, archetype grants
//! - [`stress`]: the 0..=100 track, resistance, recovery, panic table
//! - [`config`]: the assembled [`Ruleset`] and its digest

pub mod attributes;
pub mod config;
pub mod error;
pub mod ids;
pub mod pointbuy;
pub mod proficiency;
pub mod stats;
pub mod stress;

// Re-export primary types
pub use attributes::{Attribute, AttributeSet, AttributeValues};
pub use config::Ruleset;
#[cfg(feature = "serde")]
pub use config::ruleset_digest;
pub use error::{ErrorKind, InputError, OperationError, RulesError, RulesResult};
pub use ids::{ArchetypeId, LineageId};
pub use pointbuy::{AllocationMode, AllocationState, CostCurve, CostStep, PointBuyConfig};
pub use proficiency::{
    AdvancementThresholds, ArchetypeProficiencies, CategorySet, ProficiencyProgress,
    ProficiencySheet, ProficiencyTier, TechniqueAccess, TierEffect, TierEffectTable,
    WeaponCategory,
};
pub use stats::{
    DerivedProfile, DerivedStat, FormulaCatalog, ScalingTerm, StatFormula, StatFormulaBuilder,
};
pub use stress::{
    Afflictions, ForcedAction, PanicReaction, ResistanceCheck, RestType, StressApplicationResult,
    StressRecoveryResult, StressSource, StressStage, StressState, StressTuning,
    apply_resisted_stress, apply_stress, recover_stress,
};
