//! Data-driven content definitions and loaders for the rules kernel.
//!
//! This crate houses shipped rules content and provides loaders for RON/TOML
//! data files:
//! - Point-buy curve, pools, thresholds, and stress tuning (TOML)
//! - Derived-stat formula catalog (data-driven via RON)
//! - Archetype proficiency grants and recommended builds (data-driven via RON)
//!
//! Content only configures the kernel; the mechanics that consume it live in
//! rules-core. All loaders deserialize into plain document types and convert
//! through rules-core's validating constructors, so a loaded ruleset is as
//! trustworthy as a hand-built one.

pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::{
    recommended_builds, standard_archetypes, standard_formulas, standard_point_buy,
    standard_ruleset,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    ArchetypeLoader, ArchetypeSpec, ConfigLoader, ContentFactory, FormulaLoader, FormulaSpec,
    LoadedArchetype, RulesetConfig,
};
