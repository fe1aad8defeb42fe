//! Weapon proficiency: tiers, per-category advancement, archetype grants,
//! and the mechanical effects of each tier.
//!
//! ```text
//! non_proficient ──10──> proficient ──25──> expert ──50──> master
//! ```
//!
//! Thresholds gate advancement but never trigger it: reaching one marks a
//! category ready, and the explicit advancement step does the promotion.

pub mod archetype;
pub mod category;
pub mod effect;
pub mod progress;
pub mod sheet;
pub mod tier;

// Re-export primary types
pub use archetype::ArchetypeProficiencies;
pub use category::{CategorySet, WeaponCategory};
pub use effect::{TechniqueAccess, TierEffect, TierEffectTable};
pub use progress::ProficiencyProgress;
pub use sheet::ProficiencySheet;
pub use tier::{AdvancementThresholds, ProficiencyTier};
