//! Normalized identifiers for content-defined keys.
//!
//! Archetypes and lineages are open-ended: content tables introduce new ones
//! without touching this crate. Their keys are therefore strings rather than
//! enums, normalized once at the boundary (trimmed, lowercased) so that
//! lookups never depend on how a caller happened to spell the key.

use std::fmt;
use std::str::FromStr;

use crate::error::{InputError, RulesError, RulesResult};

fn normalized(raw: &str, what: &'static str) -> RulesResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::BlankIdentifier { what }.into());
    }
    Ok(trimmed.to_lowercase())
}

// ============================================================================
// ArchetypeId
// ============================================================================

/// Key of a character archetype ("warrior", "mystic", ...).
///
/// Always stored lowercase with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeId(String);

impl ArchetypeId {
    /// Builds a normalized id. Blank input is rejected.
    pub fn new(raw: &str) -> RulesResult<Self> {
        Ok(Self(normalized(raw, "archetype id")?))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ArchetypeId {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ============================================================================
// LineageId
// ============================================================================

/// Key of a character lineage ("clan-born", "rune-marked", ...).
///
/// Always stored lowercase with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineageId(String);

impl LineageId {
    /// Builds a normalized id. Blank input is rejected.
    pub fn new(raw: &str) -> RulesResult<Self> {
        Ok(Self(normalized(raw, "lineage id")?))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineageId {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
