//! Attribute point-buy for character creation.
//!
//! Three layers, each pure and immutable:
//!
//! - [`CostCurve`]: how much each single increment costs
//! - [`PointBuyConfig`]: starting pools and affordability queries
//! - [`AllocationState`]: bookkeeping for an in-progress allocation

pub mod allocation;
pub mod budget;
pub mod curve;

// Re-export primary types
pub use allocation::{AllocationMode, AllocationState};
pub use budget::PointBuyConfig;
pub use curve::{CostCurve, CostStep};
