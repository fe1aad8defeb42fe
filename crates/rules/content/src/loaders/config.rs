//! Ruleset tunables loader.
//!
//! Everything scalar lives in one TOML file: the point-buy curve and pools,
//! advancement thresholds, stress tuning, and (optionally) the tier effect
//! table. Omitted sections with shipped values fall back to those values.

use std::path::Path;

use rules_core::{
    AdvancementThresholds, ArchetypeId, CostCurve, PointBuyConfig, ProficiencyTier, StressTuning,
    TechniqueAccess, TierEffect, TierEffectTable,
};

use crate::loaders::{LoadResult, read_file};

/// All scalar tunables of a ruleset, validated and ready to assemble.
#[derive(Clone, Debug)]
pub struct RulesetConfig {
    pub point_buy: PointBuyConfig,
    pub thresholds: AdvancementThresholds,
    pub stress: StressTuning,
    pub tier_effects: TierEffectTable,
}

/// Loader for ruleset tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load ruleset tunables from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file
    ///
    /// # Returns
    ///
    /// Returns a validated [`RulesetConfig`].
    pub fn load(path: &Path) -> LoadResult<RulesetConfig> {
        let content = read_file(path)?;
        let doc: ConfigDoc = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        doc.into_config()
    }
}

// ============================================================================
// TOML document shape
// ============================================================================

#[derive(Debug, serde::Deserialize)]
struct ConfigDoc {
    point_buy: PointBuyDoc,
    #[serde(default)]
    thresholds: Option<ThresholdsDoc>,
    #[serde(default)]
    stress: Option<StressDoc>,
    #[serde(default)]
    tier_effects: Option<Vec<TierEffectDoc>>,
}

#[derive(Debug, serde::Deserialize)]
struct PointBuyDoc {
    min_value: i32,
    max_value: i32,
    standard_pool: i32,
    steps: Vec<CostStepDoc>,
    #[serde(default)]
    pool_overrides: std::collections::BTreeMap<String, i32>,
}

#[derive(Debug, serde::Deserialize)]
struct CostStepDoc {
    target: i32,
    cost: i32,
}

#[derive(Debug, serde::Deserialize)]
struct ThresholdsDoc {
    to_proficient: u32,
    to_expert: u32,
    to_master: u32,
}

#[derive(Debug, serde::Deserialize)]
struct StressDoc {
    short_rest_multiplier: u32,
    long_rest_multiplier: u32,
    milestone_recovery: u32,
    trauma_pass_reset: u32,
    trauma_fail_reset: u32,
}

#[derive(Debug, serde::Deserialize)]
struct TierEffectDoc {
    tier: String,
    attack_modifier: i32,
    damage_modifier: i32,
    can_use_special: bool,
    technique_access: String,
}

// ============================================================================
// Conversion into rules-core types
// ============================================================================

impl ConfigDoc {
    fn into_config(self) -> LoadResult<RulesetConfig> {
        let point_buy = self.point_buy.into_point_buy()?;

        let thresholds = match self.thresholds {
            Some(doc) => AdvancementThresholds::new(doc.to_proficient, doc.to_expert, doc.to_master)
                .map_err(|e| anyhow::anyhow!("Invalid advancement thresholds: {}", e))?,
            None => AdvancementThresholds::STANDARD,
        };

        let stress = match self.stress {
            Some(doc) => StressTuning::new(
                doc.short_rest_multiplier,
                doc.long_rest_multiplier,
                doc.milestone_recovery,
                doc.trauma_pass_reset,
                doc.trauma_fail_reset,
            )
            .map_err(|e| anyhow::anyhow!("Invalid stress tuning: {}", e))?,
            None => StressTuning::STANDARD,
        };

        let tier_effects = match self.tier_effects {
            Some(rows) => build_tier_effects(rows)?,
            None => TierEffectTable::STANDARD,
        };

        Ok(RulesetConfig {
            point_buy,
            thresholds,
            stress,
            tier_effects,
        })
    }
}

impl PointBuyDoc {
    fn into_point_buy(self) -> LoadResult<PointBuyConfig> {
        let curve = CostCurve::new(
            self.min_value,
            self.max_value,
            self.steps.iter().map(|step| (step.target, step.cost)),
        )
        .map_err(|e| anyhow::anyhow!("Invalid cost curve: {}", e))?;

        let mut overrides = Vec::with_capacity(self.pool_overrides.len());
        for (name, points) in &self.pool_overrides {
            let id: ArchetypeId = name
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid pool override key '{}': {}", name, e))?;
            overrides.push((id, *points));
        }

        PointBuyConfig::new(curve, self.standard_pool, overrides)
            .map_err(|e| anyhow::anyhow!("Invalid point-buy configuration: {}", e))
    }
}

/// Builds a tier effect table from rows keyed by tier name.
///
/// Every tier must appear exactly once.
fn build_tier_effects(rows: Vec<TierEffectDoc>) -> LoadResult<TierEffectTable> {
    let mut slots: [Option<TierEffect>; ProficiencyTier::COUNT] = [None; ProficiencyTier::COUNT];

    for row in rows {
        let tier: ProficiencyTier = row
            .tier
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown proficiency tier '{}'", row.tier))?;
        let access: TechniqueAccess = row.technique_access.parse().map_err(|_| {
            anyhow::anyhow!(
                "Unknown technique access '{}' for tier '{}'",
                row.technique_access,
                tier
            )
        })?;

        let slot = &mut slots[tier.as_index()];
        if slot.is_some() {
            return Err(anyhow::anyhow!("Tier '{}' appears twice in tier_effects", tier));
        }
        *slot = Some(TierEffect::new(
            row.attack_modifier,
            row.damage_modifier,
            row.can_use_special,
            access,
        ));
    }

    let mut effects = [TierEffect::new(0, 0, false, TechniqueAccess::None); ProficiencyTier::COUNT];
    for (tier, slot) in ProficiencyTier::all().into_iter().zip(slots) {
        effects[tier.as_index()] =
            slot.ok_or_else(|| anyhow::anyhow!("tier_effects is missing tier '{}'", tier))?;
    }

    Ok(TierEffectTable::new(effects))
}
