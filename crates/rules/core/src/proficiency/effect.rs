//! Mechanical effects of wielding a weapon at each proficiency tier.

use crate::proficiency::tier::ProficiencyTier;

/// Which slice of a weapon's technique list a wielder may use.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TechniqueAccess {
    None,
    Basic,
    Advanced,
    Signature,
}

/// Modifiers applied when attacking with a weapon at a given tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierEffect {
    attack_modifier: i32,
    damage_modifier: i32,
    can_use_special: bool,
    technique_access: TechniqueAccess,
}

impl TierEffect {
    pub const fn new(
        attack_modifier: i32,
        damage_modifier: i32,
        can_use_special: bool,
        technique_access: TechniqueAccess,
    ) -> Self {
        Self {
            attack_modifier,
            damage_modifier,
            can_use_special,
            technique_access,
        }
    }

    #[inline]
    pub const fn attack_modifier(&self) -> i32 {
        self.attack_modifier
    }

    #[inline]
    pub const fn damage_modifier(&self) -> i32 {
        self.damage_modifier
    }

    #[inline]
    pub const fn can_use_special(&self) -> bool {
        self.can_use_special
    }

    #[inline]
    pub const fn technique_access(&self) -> TechniqueAccess {
        self.technique_access
    }
}

/// Effects for all four tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierEffectTable {
    // Ordered by ProficiencyTier::as_index.
    effects: [TierEffect; ProficiencyTier::COUNT],
}

impl TierEffectTable {
    /// The shipped table.
    ///
    /// ```text
    /// tier            attack  damage  special  techniques
    /// non_proficient    -3      -2      no       none
    /// proficient         0       0      yes      basic
    /// expert            +1       0      yes      advanced
    /// master            +2      +1      yes      signature
    /// ```
    pub const STANDARD: Self = Self {
        effects: [
            TierEffect::new(-3, -2, false, TechniqueAccess::None),
            TierEffect::new(0, 0, true, TechniqueAccess::Basic),
            TierEffect::new(1, 0, true, TechniqueAccess::Advanced),
            TierEffect::new(2, 1, true, TechniqueAccess::Signature),
        ],
    };

    pub const fn new(effects: [TierEffect; ProficiencyTier::COUNT]) -> Self {
        Self { effects }
    }

    #[inline]
    pub const fn get(&self, tier: ProficiencyTier) -> TierEffect {
        self.effects[tier.as_index()]
    }
}

impl Default for TierEffectTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
