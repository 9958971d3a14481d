//! Monte Carlo estimation of the hit fraction.
//!
//! Repeated attack/defence roll-offs under a fixed seed, for checking the
//! discrete roll model against the closed-form [`hit_chance`] and for
//! estimating accuracy in larger simulations. The parallel variant splits
//! iterations into per-core batches; each batch derives its own seed from the
//! base seed, so results are reproducible but differ from the serial order.
//!
//! [`hit_chance`]: crate::combat::hit_chance

use rayon::prelude::*;

use crate::combat::resolve::{roll_attack_raw, RollError};
use crate::combat::Rng;

/// Fraction of `iterations` roll-offs that land, drawn from a single
/// generator seeded with `seed`. Zero iterations yield 0.0.
///
/// Fails with [`RollError`] when either maximum roll is zero or negative,
/// before any sampling happens.
pub fn sampled_hit_fraction(
    max_attack_roll: i64,
    max_defence_roll: i64,
    iterations: usize,
    seed: u64,
) -> Result<f64, RollError> {
    let (attack_bound, defence_bound) = validate_bounds(max_attack_roll, max_defence_roll)?;
    if iterations == 0 {
        return Ok(0.0);
    }
    let mut rng = Rng::new(seed);
    let mut hits = 0usize;
    for _ in 0..iterations {
        if roll_attack_raw(&mut rng, attack_bound, defence_bound) {
            hits += 1;
        }
    }
    Ok(hits as f64 / iterations as f64)
}

/// Like [`sampled_hit_fraction`] but distributes iteration batches across all
/// CPU cores via Rayon. Batch `i` uses `seed.wrapping_add(i as u64)`, so the
/// estimate is reproducible for a given seed and core-independent.
pub fn sampled_hit_fraction_parallel(
    max_attack_roll: i64,
    max_defence_roll: i64,
    iterations: usize,
    seed: u64,
) -> Result<f64, RollError> {
    let (attack_bound, defence_bound) = validate_bounds(max_attack_roll, max_defence_roll)?;
    if iterations == 0 {
        return Ok(0.0);
    }
    let batches = batch_ranges(iterations, rayon::current_num_threads());
    let hits: usize = batches
        .par_iter()
        .enumerate()
        .map(|(batch_index, &(start, end))| {
            let mut rng = Rng::new(seed.wrapping_add(batch_index as u64));
            (start..end)
                .filter(|_| roll_attack_raw(&mut rng, attack_bound, defence_bound))
                .count()
        })
        .sum();
    Ok(hits as f64 / iterations as f64)
}

fn validate_bounds(max_attack_roll: i64, max_defence_roll: i64) -> Result<(u64, u64), RollError> {
    if max_attack_roll <= 0 {
        return Err(RollError {
            bound: max_attack_roll,
        });
    }
    if max_defence_roll <= 0 {
        return Err(RollError {
            bound: max_defence_roll,
        });
    }
    Ok((max_attack_roll as u64, max_defence_roll as u64))
}

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use hitsplat::monte_carlo::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}
