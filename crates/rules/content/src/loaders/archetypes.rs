//! Archetype catalog loader.
//!
//! Archetypes are open content: the RON file decides which ones exist, which
//! weapon categories each starts proficient with, and optionally a
//! recommended attribute spread for players who skip manual point-buy.

use std::path::Path;

use rules_core::{ArchetypeId, ArchetypeProficiencies, AttributeSet, CategorySet, WeaponCategory};

use crate::loaders::{LoadResult, read_file};

/// One archetype as it appears in the RON file.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ArchetypeSpec {
    pub id: String,
    pub categories: Vec<String>,
    #[serde(default)]
    pub recommended_build: Option<BuildSpec>,
}

/// Recommended attribute spread in authoring order.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BuildSpec {
    pub might: i32,
    pub finesse: i32,
    pub wits: i32,
    pub will: i32,
    pub sturdiness: i32,
}

/// A loaded archetype: validated grants plus the optional build.
#[derive(Clone, Debug)]
pub struct LoadedArchetype {
    pub proficiencies: ArchetypeProficiencies,
    pub recommended_build: Option<AttributeSet>,
}

/// Loader for the archetype catalog from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load the archetype catalog from a RON file.
    ///
    /// RON format: `Vec<ArchetypeSpec>`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    ///
    /// # Returns
    ///
    /// Returns a Vec of [`LoadedArchetype`] in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<LoadedArchetype>> {
        let content = read_file(path)?;
        let specs: Vec<ArchetypeSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype RON: {}", e))?;

        let mut archetypes = Vec::with_capacity(specs.len());
        for spec in specs {
            archetypes.push(spec.into_archetype()?);
        }

        Ok(archetypes)
    }
}

impl ArchetypeSpec {
    /// Converts the file representation into a validated [`LoadedArchetype`].
    pub fn into_archetype(self) -> LoadResult<LoadedArchetype> {
        let id: ArchetypeId = self
            .id
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid archetype id '{}': {}", self.id, e))?;

        let mut grants = CategorySet::empty();
        for name in &self.categories {
            let category = WeaponCategory::parse(name).map_err(|e| {
                anyhow::anyhow!("Archetype '{}' lists an unusable category: {}", id, e)
            })?;
            grants |= category.flag();
        }

        let proficiencies = ArchetypeProficiencies::new(id.clone(), grants)
            .map_err(|e| anyhow::anyhow!("Invalid archetype '{}': {}", id, e))?;

        let recommended_build = self.recommended_build.map(|build| {
            AttributeSet::new(
                build.might,
                build.finesse,
                build.wits,
                build.will,
                build.sturdiness,
            )
        });

        Ok(LoadedArchetype {
            proficiencies,
            recommended_build,
        })
    }
}
