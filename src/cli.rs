//! Command dispatch for the `hitsplat` binary. Reports are emitted as JSON on
//! stdout so downstream tooling can consume them directly.

use serde::Serialize;

use crate::combat::{
    effective_level, hit_chance, max_attack_roll, max_hit, npc_max_defence_roll, CombatStyle,
};
use crate::monte_carlo::sampled_hit_fraction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Simulate,
    Chance,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("simulate") => Some(Command::Simulate),
        Some("chance") => Some(Command::Chance),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::Chance) => handle_chance(args),
        None => {
            eprintln!("usage: hitsplat <simulate|chance>");
            2
        }
    }
}

#[derive(Debug, Serialize)]
struct SimulateReport {
    effective_strength_level: i64,
    effective_attack_level: i64,
    max_hit: i64,
    max_attack_roll: i64,
    max_defence_roll: i64,
    hit_chance: f64,
    sampled_hit_fraction: f64,
    iterations: usize,
    seed: u64,
}

/// Canonical scenario: maxed melee player (boosted, offensive prayers up,
/// aggressive stance for strength) against a high-defence hostile.
fn handle_simulate(args: &[String]) -> i32 {
    let iterations = match parse_usize_arg(args.get(2), "iterations", 10_000) {
        Ok(value) => value,
        Err(code) => return code,
    };
    let seed = match parse_u64_arg(args.get(3), "seed", 7) {
        Ok(value) => value,
        Err(code) => return code,
    };

    let base_level = 99;
    let boost = 26;
    let strength_prayer = 1.23;
    let attack_prayer = 1.20;
    let strength_stance = 3;
    let attack_stance = 0;
    let strength_equipment_bonus = 66;
    let attack_equipment_bonus = 67;
    let hostile_defence_level = 135;
    let hostile_style_bonus = 20;

    let effective_strength = effective_level(
        base_level,
        boost,
        strength_prayer,
        CombatStyle::Melee,
        strength_stance,
        false,
    );
    let effective_attack = effective_level(
        base_level,
        boost,
        attack_prayer,
        CombatStyle::Melee,
        attack_stance,
        false,
    );
    let hit = max_hit(effective_strength, strength_equipment_bonus, 1.0);
    let attack_roll = max_attack_roll(effective_attack, attack_equipment_bonus, 1.0);
    let defence_roll = npc_max_defence_roll(hostile_defence_level, hostile_style_bonus);

    let sampled = match sampled_hit_fraction(attack_roll, defence_roll, iterations, seed) {
        Ok(fraction) => fraction,
        Err(err) => {
            eprintln!("simulate error: {err}");
            return 1;
        }
    };

    let report = SimulateReport {
        effective_strength_level: effective_strength,
        effective_attack_level: effective_attack,
        max_hit: hit,
        max_attack_roll: attack_roll,
        max_defence_roll: defence_roll,
        hit_chance: hit_chance(attack_roll, defence_roll),
        sampled_hit_fraction: sampled,
        iterations,
        seed,
    };
    print_json(&report)
}

#[derive(Debug, Serialize)]
struct ChanceReport {
    max_attack_roll: i64,
    max_defence_roll: i64,
    hit_chance: f64,
}

fn handle_chance(args: &[String]) -> i32 {
    let (attack_roll, defence_roll) = match (parse_i64(args.get(2)), parse_i64(args.get(3))) {
        (Some(attack), Some(defence)) => (attack, defence),
        _ => {
            eprintln!("usage: hitsplat chance <max_attack_roll> <max_defence_roll>");
            return 2;
        }
    };

    let report = ChanceReport {
        max_attack_roll: attack_roll,
        max_defence_roll: defence_roll,
        hit_chance: hit_chance(attack_roll, defence_roll),
    };
    print_json(&report)
}

fn print_json<T: Serialize>(report: &T) -> i32 {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(err) => {
            eprintln!("report serialization error: {err}");
            1
        }
    }
}

fn parse_i64(arg: Option<&String>) -> Option<i64> {
    arg.and_then(|raw| raw.parse().ok())
}

fn parse_usize_arg(arg: Option<&String>, name: &str, default: usize) -> Result<usize, i32> {
    match arg {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            eprintln!("invalid {name}: {raw:?}");
            2
        }),
    }
}

fn parse_u64_arg(arg: Option<&String>, name: &str, default: u64) -> Result<u64, i32> {
    match arg {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            eprintln!("invalid {name}: {raw:?}");
            2
        }),
    }
}
