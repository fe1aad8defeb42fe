//! Derived-stat formulas and the catalog that evaluates them.
//!
//! ```text
//! [ AttributeValues ]───┐
//! [ ArchetypeId ]───────┼──> StatFormula::evaluate ──> i32
//! [ LineageId ]─────────┘
//!
//! FormulaCatalog: one StatFormula per DerivedStat, evaluated together
//! into a DerivedProfile.
//! ```

pub mod catalog;
pub mod formula;

// Re-export primary types
pub use catalog::{DerivedProfile, DerivedStat, FormulaCatalog};
pub use formula::{NEUTRAL_MULTIPLIER_PERCENT, ScalingTerm, StatFormula, StatFormulaBuilder};
