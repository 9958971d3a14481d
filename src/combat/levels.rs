//! Effective-level calculation.
//!
//! The formulas and truncation points in this module intentionally mirror the
//! published game formulas exactly: boost is added before the prayer
//! multiplier, the boosted total is floored before the stance bonus and the
//! fixed +8 offset, and the style multiplier is applied last with its own
//! floor. Reordering any of these steps changes the result by a point in edge
//! cases.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Multiplier for void melee/ranged sets.
pub const VOID_MULTIPLIER: f64 = 1.1;
/// Multiplier for the magic branch. Applies whenever the style is magic,
/// independent of the void flag; there is no combined void+magic bonus. This
/// asymmetry is part of the formula contract, not a bug.
pub const MAGE_MULTIPLIER: f64 = 1.45;
/// Fixed offset folded into every effective level.
pub const EFFECTIVE_LEVEL_OFFSET: i64 = 8;

/// Combat style being calculated for. Resolved from the game's string tags
/// once at the boundary; the engine only ever sees the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStyle {
    Melee,
    Ranged,
    Magic,
    Defence,
}

impl CombatStyle {
    /// Whether a void set boosts this style. Magic has its own branch and
    /// defence gets nothing.
    pub const fn benefits_from_void(self) -> bool {
        !matches!(self, Self::Magic | Self::Defence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown combat style tag: {0:?}")]
pub struct ParseStyleError(pub String);

impl FromStr for CombatStyle {
    type Err = ParseStyleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "melee" | "attack" | "strength" | "stab" | "slash" | "crush" => Ok(Self::Melee),
            "ranged" | "range" => Ok(Self::Ranged),
            "mage" | "magic" => Ok(Self::Magic),
            "defence" | "defense" => Ok(Self::Defence),
            _ => Err(ParseStyleError(tag.to_string())),
        }
    }
}

impl fmt::Display for CombatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Melee => "melee",
            Self::Ranged => "ranged",
            Self::Magic => "magic",
            Self::Defence => "defence",
        };
        f.write_str(tag)
    }
}

/// Calculate an effective combat level from a base stat.
///
/// Steps, in order:
/// 1. `floor((base_level + boost) * prayer)`
/// 2. `+ stance_bonus + 8`
/// 3. one conditional multiplier: ×1.1 when `void_set` and the style benefits
///    from void; otherwise ×1.45 when the style is magic (regardless of
///    `void_set`); otherwise none
/// 4. final floor
///
/// Stat ranges are not validated; out-of-game values (negative levels,
/// sub-1.0 prayers) flow through the same arithmetic.
pub fn effective_level(
    base_level: i64,
    boost: i64,
    prayer: f64,
    style: CombatStyle,
    stance_bonus: i64,
    void_set: bool,
) -> i64 {
    let boosted = ((base_level + boost) as f64 * prayer).floor() as i64;
    let offset = boosted + stance_bonus + EFFECTIVE_LEVEL_OFFSET;
    let scaled = if void_set && style.benefits_from_void() {
        offset as f64 * VOID_MULTIPLIER
    } else if style == CombatStyle::Magic {
        offset as f64 * MAGE_MULTIPLIER
    } else {
        offset as f64
    };
    scaled.floor() as i64
}
