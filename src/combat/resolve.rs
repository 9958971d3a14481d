//! Hit resolution: closed-form hit chance and the stochastic roll-offs.
//!
//! The stochastic operations take an explicit [`Rng`] so callers control the
//! seed; fixed seeds give reproducible outcome sequences in tests and
//! simulations.

use thiserror::Error;

use crate::combat::rng::Rng;

/// A uniform draw was requested over an empty or negative range.
///
/// A maximum roll of zero leaves nothing to draw from; this engine fails fast
/// rather than coercing the degenerate case to a zero outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw from empty roll range [0, {bound})")]
pub struct RollError {
    pub bound: i64,
}

/// Probability in [0, 1] that an attack lands, from the two maximum rolls.
///
/// Closed form of the discrete roll-off in [`roll_attack`]: both samples are
/// uniform on their half-open ranges and the attack must strictly exceed the
/// defence. Two branches, by which roll is larger:
///
/// - attack > defence: `1 - (defence + 2) / (2 * (attack + 1))`
/// - otherwise: `attack / (2 * (defence + 1))`
pub fn hit_chance(max_attack_roll: i64, max_defence_roll: i64) -> f64 {
    if max_attack_roll > max_defence_roll {
        1.0 - (max_defence_roll + 2) as f64 / (2.0 * (max_attack_roll + 1) as f64)
    } else {
        max_attack_roll as f64 / (2.0 * (max_defence_roll + 1) as f64)
    }
}

/// Roll-off between validated, non-empty ranges. Shared by [`roll_attack`]
/// and the Monte Carlo sampler, which validates once up front.
#[inline]
pub(crate) fn roll_attack_raw(rng: &mut Rng, max_attack_roll: u64, max_defence_roll: u64) -> bool {
    let attack_sample = rng.next_below(max_attack_roll);
    let defence_sample = rng.next_below(max_defence_roll);
    attack_sample > defence_sample
}

/// Roll a single attack against a defence.
///
/// Draws an attack sample uniformly from `[0, max_attack_roll)` and a defence
/// sample uniformly from `[0, max_defence_roll)`, independently each call;
/// the attack lands iff its sample strictly exceeds the defence sample.
///
/// Fails with [`RollError`] when either maximum roll is zero or negative
/// (empty sampling domain).
pub fn roll_attack(
    rng: &mut Rng,
    max_attack_roll: i64,
    max_defence_roll: i64,
) -> Result<bool, RollError> {
    let attack_bound = validate_bound(max_attack_roll)?;
    let defence_bound = validate_bound(max_defence_roll)?;
    Ok(roll_attack_raw(rng, attack_bound, defence_bound))
}

/// Roll the damage of a landed hit: uniform draw from `[0, max_hit)`.
///
/// Fails with [`RollError`] when `max_hit` is zero or negative, same policy
/// as [`roll_attack`].
pub fn roll_hit_damage_normal(rng: &mut Rng, max_hit: i64) -> Result<i64, RollError> {
    let bound = validate_bound(max_hit)?;
    Ok(rng.next_below(bound) as i64)
}

#[inline]
fn validate_bound(bound: i64) -> Result<u64, RollError> {
    if bound <= 0 {
        Err(RollError { bound })
    } else {
        Ok(bound as u64)
    }
}
