//! The shipped rules tables.
//!
//! Everything here mirrors the published campaign book: the point-buy
//! curve, the derived-stat formula table, archetype weapon grants, and the
//! recommended creation builds. Campaigns that want different numbers load
//! their own files through [`crate::loaders`] instead of editing these.

use std::collections::BTreeMap;

use rules_core::{
    AdvancementThresholds, ArchetypeId, ArchetypeProficiencies, Attribute, AttributeSet,
    CostCurve, DerivedStat, FormulaCatalog, LineageId, PointBuyConfig, Ruleset, RulesResult,
    StatFormula, StressTuning, TierEffectTable, WeaponCategory,
};

/// Standard point-buy: values 1..=10, where 2 through 8 cost 1 point each
/// and 9 through 10 cost 2. Everyone gets 15 points except the adept's 14.
pub fn standard_point_buy() -> RulesResult<PointBuyConfig> {
    let curve = CostCurve::new(1, 10, (2..=8).map(|v| (v, 1)).chain([(9, 2), (10, 2)]))?;
    PointBuyConfig::new(curve, 15, [(ArchetypeId::new("adept")?, 14)])
}

/// Standard derived-stat formula table.
pub fn standard_formulas() -> RulesResult<FormulaCatalog> {
    let warrior = ArchetypeId::new("warrior")?;
    let skirmisher = ArchetypeId::new("skirmisher")?;
    let mystic = ArchetypeId::new("mystic")?;
    let adept = ArchetypeId::new("adept")?;

    let clan_born = LineageId::new("clan-born")?;
    let rune_marked = LineageId::new("rune-marked")?;
    let iron_blooded = LineageId::new("iron-blooded")?;
    let vargr_kin = LineageId::new("vargr-kin")?;

    let max_health = StatFormula::builder(DerivedStat::MaxHealth)
        .base_value(50)
        .scale(Attribute::Sturdiness, 1000)
        .archetype_bonus(warrior.clone(), 49)
        .archetype_bonus(skirmisher.clone(), 30)
        .archetype_bonus(mystic.clone(), 20)
        .archetype_bonus(adept, 30)
        .lineage_bonus(clan_born, 5)
        .build()?;

    let max_stamina = StatFormula::builder(DerivedStat::MaxStamina)
        .base_value(20)
        .scale(Attribute::Finesse, 500)
        .scale(Attribute::Might, 500)
        .archetype_bonus(warrior, 5)
        .archetype_bonus(skirmisher, 5)
        .build()?;

    let max_aether = StatFormula::builder(DerivedStat::MaxAetherPool)
        .scale(Attribute::Will, 1000)
        .scale(Attribute::Wits, 500)
        .archetype_bonus(mystic, 20)
        .lineage_bonus(rune_marked.clone(), 5)
        .lineage_multiplier_percent(rune_marked, 110)
        .build()?;

    let initiative = StatFormula::builder(DerivedStat::Initiative)
        .scale(Attribute::Finesse, 100)
        .scale(Attribute::Wits, 50)
        .build()?;

    let soak = StatFormula::builder(DerivedStat::Soak)
        .scale(Attribute::Sturdiness, 50)
        .lineage_bonus(iron_blooded, 2)
        .build()?;

    let movement_speed = StatFormula::builder(DerivedStat::MovementSpeed)
        .base_value(5)
        .lineage_bonus(vargr_kin, 1)
        .build()?;

    let carrying_capacity = StatFormula::builder(DerivedStat::CarryingCapacity)
        .scale(Attribute::Might, 1000)
        .build()?;

    FormulaCatalog::new([
        max_health,
        max_stamina,
        max_aether,
        initiative,
        soak,
        movement_speed,
        carrying_capacity,
    ])
}

/// Standard archetype weapon grants.
///
/// ```text
/// warrior     all eleven categories
/// skirmisher  daggers, swords, axes, bows, crossbows
/// mystic      daggers, staves, arcane implements
/// adept       daggers, staves, hammers, crossbows
/// ```
pub fn standard_archetypes() -> RulesResult<Vec<ArchetypeProficiencies>> {
    let warrior = ArchetypeProficiencies::new(
        ArchetypeId::new("warrior")?,
        WeaponCategory::all().into_iter().collect(),
    )?;
    let skirmisher = ArchetypeProficiencies::new(
        ArchetypeId::new("skirmisher")?,
        [
            WeaponCategory::Daggers,
            WeaponCategory::Swords,
            WeaponCategory::Axes,
            WeaponCategory::Bows,
            WeaponCategory::Crossbows,
        ]
        .into_iter()
        .collect(),
    )?;
    let mystic = ArchetypeProficiencies::new(
        ArchetypeId::new("mystic")?,
        [
            WeaponCategory::Daggers,
            WeaponCategory::Staves,
            WeaponCategory::ArcaneImplements,
        ]
        .into_iter()
        .collect(),
    )?;
    let adept = ArchetypeProficiencies::new(
        ArchetypeId::new("adept")?,
        [
            WeaponCategory::Daggers,
            WeaponCategory::Staves,
            WeaponCategory::Hammers,
            WeaponCategory::Crossbows,
        ]
        .into_iter()
        .collect(),
    )?;
    Ok(vec![warrior, skirmisher, mystic, adept])
}

/// Recommended creation builds for archetypes that publish one.
///
/// Not every archetype does; the rest are expected to use manual
/// allocation.
pub fn recommended_builds() -> RulesResult<BTreeMap<ArchetypeId, AttributeSet>> {
    let mut builds = BTreeMap::new();
    builds.insert(
        ArchetypeId::new("warrior")?,
        AttributeSet::new(4, 3, 2, 2, 4),
    );
    builds.insert(ArchetypeId::new("adept")?, AttributeSet::new(3, 3, 3, 2, 3));
    Ok(builds)
}

/// The complete shipped ruleset.
pub fn standard_ruleset() -> RulesResult<Ruleset> {
    Ok(Ruleset::new(
        standard_point_buy()?,
        standard_formulas()?,
        AdvancementThresholds::STANDARD,
        TierEffectTable::STANDARD,
        standard_archetypes()?,
        StressTuning::STANDARD,
    ))
}
