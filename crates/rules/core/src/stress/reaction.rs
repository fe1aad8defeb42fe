//! The d10 panic table.
//!
//! Rolled when stress crosses into Panicked. The die is rolled elsewhere;
//! this module maps the result onto a reaction and exposes each reaction's
//! mechanical payload: afflictions applied, a forced action if any, and how
//! many turns it lasts. A duration of zero means the reaction resolves
//! immediately or lasts until an external condition clears it.

use crate::error::{InputError, RulesResult};

/// Conditions a panic reaction can inflict.
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
pub enum ForcedAction {
    /// Must move away from the stress source each turn.
    FleeFromSource,
    /// Must attack the nearest creature, friend or foe.
    AttackNearest,
    /// Acts at random, without intent.
    RandomAction,
}

bitflags::bitflags! {
    /// Status conditions inflicted by panic reactions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Afflictions: u8 {
        const STUNNED = 1 << 0;
        const PRONE = 1 << 1;
        const UNCONSCIOUS = 1 << 2;
    }
}

/// One row of the panic table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PanicReaction {
    /// The mind locks up entirely.
    Frozen,
    /// A scream escapes; stealth is over.
    Scream,
    /// Survival instinct overrides everything.
    Flee,
    /// Curls up small against the world.
    Fetal,
    /// Consciousness flees instead.
    Blackout,
    /// The threat simply is not acknowledged.
    Denial,
    /// Rage where reason should be.
    Violence,
    /// Completely shut down until pain intervenes.
    Catatonia,
    /// Mind and body disconnect.
    Dissociation,
    /// The mind holds together, this once.
    LuckyBreak,
}

impl PanicReaction {
    /// Number of table rows.
    pub const COUNT: usize = 10;

    /// All reactions in roll order.
    pub const fn all() -> [PanicReaction; Self::COUNT] {
        [
            PanicReaction::Frozen,
            PanicReaction::Scream,
            PanicReaction::Flee,
            PanicReaction::Fetal,
            PanicReaction::Blackout,
            PanicReaction::Denial,
            PanicReaction::Violence,
            PanicReaction::Catatonia,
            PanicReaction::Dissociation,
            PanicReaction::LuckyBreak,
        ]
    }

    /// Maps a d10 roll onto the table. Anything outside 1..=10 is an error.
    pub fn from_roll(roll: u32) -> RulesResult<Self> {
        match roll {
            1 => Ok(PanicReaction::Frozen),
            2 => Ok(PanicReaction::Scream),
            3 => Ok(PanicReaction::Flee),
            4 => Ok(PanicReaction::Fetal),
            5 => Ok(PanicReaction::Blackout),
            6 => Ok(PanicReaction::Denial),
            7 => Ok(PanicReaction::Violence),
            8 => Ok(PanicReaction::Catatonia),
            9 => Ok(PanicReaction::Dissociation),
            10 => Ok(PanicReaction::LuckyBreak),
            _ => Err(InputError::PanicRollOutOfRange { roll }.into()),
        }
    }

    /// The roll that produces this reaction.
    pub const fn roll(self) -> u32 {
        self as u32 + 1
    }

    /// Table-speak name for play at the table.
    pub const fn label(self) -> &'static str {
        match self {
            PanicReaction::Frozen => "Mind Lock",
            PanicReaction::Scream => "Involuntary Scream",
            PanicReaction::Flee => "Survival Instinct",
            PanicReaction::Fetal => "Fetal Position",
            PanicReaction::Blackout => "Merciful Darkness",
            PanicReaction::Denial => "Refusal",
            PanicReaction::Violence => "Blind Fury",
            PanicReaction::Catatonia => "Hollow Stare",
            PanicReaction::Dissociation => "Severed Self",
            PanicReaction::LuckyBreak => "Lucky Break",
        }
    }

    /// Turns the reaction lasts. Zero means it resolves immediately or
    /// persists until something external (pain, distance) clears it.
    pub const fn duration_turns(self) -> u32 {
        match self {
            PanicReaction::Frozen | PanicReaction::Violence | PanicReaction::Dissociation => 1,
            PanicReaction::Blackout | PanicReaction::Denial => 2,
            _ => 0,
        }
    }

    /// Conditions applied while the reaction holds.
    pub const fn afflictions(self) -> Afflictions {
        match self {
            PanicReaction::Frozen => Afflictions::STUNNED,
            PanicReaction::Fetal => Afflictions::PRONE,
            PanicReaction::Blackout => Afflictions::UNCONSCIOUS,
            PanicReaction::Catatonia => Afflictions::PRONE.union(Afflictions::STUNNED),
            _ => Afflictions::empty(),
        }
    }

    /// The action the reaction forces, if it takes control at all.
    pub const fn forced_action(self) -> Option<ForcedAction> {
        match self {
            PanicReaction::Flee => Some(ForcedAction::FleeFromSource),
            PanicReaction::Violence => Some(ForcedAction::AttackNearest),
            PanicReaction::Dissociation => Some(ForcedAction::RandomAction),
            _ => None,
        }
    }

    /// The one row with no effect at all.
    #[inline]
    pub const fn is_lucky_break(self) -> bool {
        matches!(self, PanicReaction::LuckyBreak)
    }
}
