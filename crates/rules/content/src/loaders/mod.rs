//! Loaders for reading rules tables from files.
//!
//! Scalar tunables (pools, thresholds, stress knobs) live in TOML; the
//! bigger catalogs (formulas, archetypes) live in RON. Every loader
//! converts file text into validated rules-core values, so nothing
//! downstream ever sees a raw document.

pub mod archetypes;
pub mod config;
pub mod factory;
pub mod formulas;

pub use archetypes::{ArchetypeLoader, ArchetypeSpec, LoadedArchetype};
pub use config::{ConfigLoader, RulesetConfig};
pub use factory::ContentFactory;
pub use formulas::{FormulaLoader, FormulaSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Converts a decimal coefficient into fixed-point hundredths.
///
/// Tables are authored in decimal (0.5, 1.1, 10). Anything with more than
/// two decimal places cannot be represented and is rejected rather than
/// silently rounded.
pub(crate) fn to_hundredths(value: f64, context: &str) -> LoadResult<i32> {
    let scaled = value * 100.0;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > 1e-6 {
        return Err(anyhow::anyhow!(
            "{context}: {value} has more than two decimal places"
        ));
    }
    if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
        return Err(anyhow::anyhow!("{context}: {value} is out of range"));
    }
    Ok(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundredths_conversion_accepts_two_decimal_places() {
        assert_eq!(to_hundredths(0.5, "test").unwrap(), 50);
        assert_eq!(to_hundredths(1.1, "test").unwrap(), 110);
        assert_eq!(to_hundredths(10.0, "test").unwrap(), 1000);
        assert_eq!(to_hundredths(-0.25, "test").unwrap(), -25);
        assert_eq!(to_hundredths(0.0, "test").unwrap(), 0);
    }

    #[test]
    fn hundredths_conversion_rejects_finer_precision() {
        assert!(to_hundredths(0.125, "test").is_err());
        assert!(to_hundredths(0.333, "test").is_err());
    }
}
