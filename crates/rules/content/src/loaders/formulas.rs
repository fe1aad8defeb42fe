//! Derived-stat formula loader.
//!
//! Formulas are authored in RON with decimal coefficients ("sturdiness"
//! scaling 10.0, a lineage multiplier of 1.1). Decimals are converted to the
//! kernel's fixed-point hundredths during loading, so files stay readable
//! while evaluation stays integer-only.

use std::collections::BTreeMap;
use std::path::Path;

use rules_core::{
    Attribute, DerivedStat, FormulaCatalog, LineageId, StatFormula,
};

use crate::loaders::{LoadResult, read_file, to_hundredths};

/// One formula as it appears in the RON file.
///
/// Only `stat` is mandatory; every omitted table defaults to empty and an
/// omitted base to zero.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FormulaSpec {
    pub stat: String,
    #[serde(default)]
    pub base_value: i32,
    #[serde(default)]
    pub scaling: BTreeMap<String, f64>,
    #[serde(default)]
    pub archetype_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub lineage_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub lineage_multipliers: BTreeMap<String, f64>,
}

/// Loader for the formula catalog from RON files.
pub struct FormulaLoader;

impl FormulaLoader {
    /// Load the formula catalog from a RON file.
    ///
    /// RON format: `Vec<FormulaSpec>`. The file must define every derived
    /// stat exactly once; the catalog refuses partial coverage.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    ///
    /// # Returns
    ///
    /// Returns a complete [`FormulaCatalog`].
    pub fn load(path: &Path) -> LoadResult<FormulaCatalog> {
        let content = read_file(path)?;
        let specs: Vec<FormulaSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse formula RON: {}", e))?;

        let mut formulas = Vec::with_capacity(specs.len());
        for spec in specs {
            formulas.push(spec.into_formula()?);
        }

        FormulaCatalog::new(formulas)
            .map_err(|e| anyhow::anyhow!("Invalid formula catalog: {}", e))
    }
}

impl FormulaSpec {
    /// Converts the file representation into a validated [`StatFormula`].
    pub fn into_formula(self) -> LoadResult<StatFormula> {
        let stat: DerivedStat = self
            .stat
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown derived stat '{}'", self.stat))?;

        let mut builder = StatFormula::builder(stat).base_value(self.base_value);

        for (name, coefficient) in &self.scaling {
            let attribute: Attribute = name.parse().map_err(|_| {
                anyhow::anyhow!("Unknown attribute '{}' in formula for {}", name, stat)
            })?;
            let hundredths =
                to_hundredths(*coefficient, &format!("scaling for {} in {}", name, stat))?;
            builder = builder.scale(attribute, hundredths);
        }

        for (name, bonus) in &self.archetype_bonuses {
            let id = name
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid archetype key '{}': {}", name, e))?;
            builder = builder.archetype_bonus(id, *bonus);
        }

        for (name, bonus) in &self.lineage_bonuses {
            let id: LineageId = name
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid lineage key '{}': {}", name, e))?;
            builder = builder.lineage_bonus(id, *bonus);
        }

        for (name, multiplier) in &self.lineage_multipliers {
            let id: LineageId = name
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid lineage key '{}': {}", name, e))?;
            let percent =
                to_hundredths(*multiplier, &format!("multiplier for {} in {}", name, stat))?;
            builder = builder.lineage_multiplier_percent(id, percent);
        }

        builder
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid formula for {}: {}", stat, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_core::{ArchetypeId, AttributeSet, AttributeValues};
    use std::io::Write;

    const CATALOG_RON: &str = r#"
[
    (
        stat: "max_health",
        base_value: 50,
        scaling: { "sturdiness": 10.0 },
        archetype_bonuses: { "warrior": 49, "mystic": 20 },
        lineage_bonuses: { "clan-born": 5 },
    ),
    (
        stat: "max_stamina",
        base_value: 20,
        scaling: { "finesse": 5.0, "might": 5.0 },
        archetype_bonuses: { "warrior": 5 },
    ),
    (
        stat: "max_aether_pool",
        scaling: { "will": 10.0, "wits": 5.0 },
        archetype_bonuses: { "mystic": 20 },
        lineage_bonuses: { "rune-marked": 5 },
        lineage_multipliers: { "rune-marked": 1.1 },
    ),
    (
        stat: "initiative",
        scaling: { "finesse": 1.0, "wits": 0.5 },
    ),
    (
        stat: "soak",
        scaling: { "sturdiness": 0.5 },
    ),
    (
        stat: "movement_speed",
        base_value: 5,
    ),
    (
        stat: "carrying_capacity",
        scaling: { "might": 10.0 },
    ),
]
"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn catalog_loads_and_evaluates() {
        let file = write_temp(CATALOG_RON);
        let catalog = FormulaLoader::load(file.path()).unwrap();

        let warrior = ArchetypeId::new("warrior").unwrap();
        let attributes = AttributeValues::from(&AttributeSet::new(4, 3, 2, 2, 4));

        // 50 + 4×10 + 49 = 139
        let hp = catalog
            .evaluate(DerivedStat::MaxHealth, &attributes, Some(&warrior), None)
            .unwrap();
        assert_eq!(hp, 139);

        // 3×1 + 2×0.5 = 4
        let initiative = catalog
            .evaluate(DerivedStat::Initiative, &attributes, Some(&warrior), None)
            .unwrap();
        assert_eq!(initiative, 4);
    }

    #[test]
    fn decimal_coefficients_become_hundredths() {
        let spec = FormulaSpec {
            stat: "soak".to_string(),
            base_value: 0,
            scaling: [("sturdiness".to_string(), 0.5)].into_iter().collect(),
            archetype_bonuses: BTreeMap::new(),
            lineage_bonuses: BTreeMap::new(),
            lineage_multipliers: BTreeMap::new(),
        };

        let formula = spec.into_formula().unwrap();
        assert_eq!(formula.scaling()[0].per_point_hundredths, 50);
    }

    #[test]
    fn overly_precise_coefficients_are_rejected() {
        let spec = FormulaSpec {
            stat: "soak".to_string(),
            base_value: 0,
            scaling: [("sturdiness".to_string(), 0.333)].into_iter().collect(),
            archetype_bonuses: BTreeMap::new(),
            lineage_bonuses: BTreeMap::new(),
            lineage_multipliers: BTreeMap::new(),
        };

        assert!(spec.into_formula().is_err());
    }

    #[test]
    fn unknown_stat_names_are_reported() {
        let file = write_temp(r#"[ ( stat: "luck" ) ]"#);
        let err = FormulaLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unknown derived stat"));
    }

    #[test]
    fn incomplete_catalogs_are_rejected() {
        let file = write_temp(r#"[ ( stat: "max_health", base_value: 50 ) ]"#);
        let err = FormulaLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid formula catalog"));
    }
}
