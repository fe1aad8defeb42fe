//! Content factory for building a ruleset from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rules_core::{ArchetypeId, AttributeSet, FormulaCatalog, Ruleset};

use crate::loaders::{
    ArchetypeLoader, ConfigLoader, FormulaLoader, LoadResult, LoadedArchetype, RulesetConfig,
};

/// Content factory that loads a complete ruleset from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── formulas.ron
/// └── archetypes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load scalar tunables from `config.toml`.
    pub fn load_config(&self) -> LoadResult<RulesetConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the formula catalog from `formulas.ron`.
    pub fn load_formulas(&self) -> LoadResult<FormulaCatalog> {
        let path = self.data_dir.join("formulas.ron");
        FormulaLoader::load(&path)
    }

    /// Load the archetype catalog from `archetypes.ron`.
    pub fn load_archetypes(&self) -> LoadResult<Vec<LoadedArchetype>> {
        let path = self.data_dir.join("archetypes.ron");
        ArchetypeLoader::load(&path)
    }

    /// Load everything and assemble a [`Ruleset`].
    ///
    /// Recommended builds are not part of the ruleset proper, so they come
    /// back alongside it, keyed by archetype.
    pub fn load_ruleset(&self) -> LoadResult<(Ruleset, BTreeMap<ArchetypeId, AttributeSet>)> {
        let config = self.load_config()?;
        let formulas = self.load_formulas()?;
        let archetypes = self.load_archetypes()?;

        let mut builds = BTreeMap::new();
        let mut grants = Vec::with_capacity(archetypes.len());
        for archetype in archetypes {
            if let Some(build) = archetype.recommended_build {
                builds.insert(archetype.proficiencies.archetype().clone(), build);
            }
            grants.push(archetype.proficiencies);
        }

        let ruleset = Ruleset::new(
            config.point_buy,
            formulas,
            config.thresholds,
            config.tier_effects,
            grants,
            config.stress,
        );

        Ok((ruleset, builds))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
