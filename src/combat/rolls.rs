//! Maximum hit and maximum accuracy/defence rolls.
//!
//! Small pure transforms from an effective level and an equipment bonus to the
//! upper bound of the corresponding roll. Each floor and clamp is a separate,
//! deliberate step; the truncation order matches the published game formulas
//! and must not be fused or reordered.
//!
//! Clamping is asymmetric on purpose: accuracy and defence rolls clamp to
//! zero, [`max_hit`] does not.

/// Maximum rollable damage for an effective strength/ranged level.
///
/// `floor((effective_level * (equipment_bonus + 64) + 320) / 640)`, then the
/// target multiplier with its own floor. `target_bonus` covers damage buffs
/// tied to the opponent (slayer helmet, salve amulet). Not clamped at zero.
pub fn max_hit(effective_level: i64, equipment_bonus: i64, target_bonus: f64) -> i64 {
    let scaled = effective_level * (equipment_bonus + 64) + 320;
    let base = scaled.div_euclid(640);
    (base as f64 * target_bonus).floor() as i64
}

/// Maximum accuracy roll for an effective attack/ranged/magic level.
///
/// `floor(effective_level * (equipment_bonus + 64) * target_bonus)`, clamped
/// to zero. `target_bonus` covers accuracy buffs tied to the opponent
/// (demonbane, dragonbane).
pub fn max_attack_roll(effective_level: i64, equipment_bonus: i64, target_bonus: f64) -> i64 {
    let roll = ((effective_level * (equipment_bonus + 64)) as f64 * target_bonus).floor() as i64;
    roll.max(0)
}

/// An NPC's maximum defence roll. NPCs fold their +9 offset in here rather
/// than going through the effective-level pipeline; `style_bonus` is the
/// defensive stat for the incoming attack style (stab, slash, crush, ranged).
pub fn npc_max_defence_roll(base_level: i64, style_bonus: i64) -> i64 {
    let roll = (base_level + 9) * (style_bonus + 64);
    roll.max(0)
}

/// A player's maximum defence roll against melee or ranged attacks, from a
/// pre-calculated effective defence level.
pub fn player_max_defence_roll(effective_defence_level: i64, equipment_bonus: i64) -> i64 {
    let roll = effective_defence_level * (equipment_bonus + 64);
    roll.max(0)
}

/// A player's maximum defence roll against magic attacks.
///
/// Magic defence blends 70% of the boosted magic level with 30% of the
/// general effective defence level, each share floored separately before they
/// are summed:
///
/// 1. `partial_defence = floor(effective_defence_level * 0.3)`
/// 2. `boosted_magic = floor((magic_level + magic_boost) * prayer)`
/// 3. `partial_magic = floor(boosted_magic * 0.7)`
/// 4. `(partial_magic + partial_defence) * (equipment_bonus + 64)`, clamped
///    to zero
pub fn player_max_magic_defence_roll(
    magic_level: i64,
    magic_boost: i64,
    effective_defence_level: i64,
    equipment_bonus: i64,
    prayer: f64,
) -> i64 {
    let partial_defence = (effective_defence_level as f64 * 0.3).floor() as i64;
    let boosted_magic = ((magic_level + magic_boost) as f64 * prayer).floor() as i64;
    let partial_magic = (boosted_magic as f64 * 0.7).floor() as i64;
    let blended_level = partial_magic + partial_defence;
    let roll = blended_level * (equipment_bonus + 64);
    roll.max(0)
}
