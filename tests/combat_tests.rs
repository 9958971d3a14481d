use hitsplat::combat::{
    effective_level, hit_chance, max_attack_roll, max_hit, npc_max_defence_roll,
    player_max_defence_roll, player_max_magic_defence_roll, roll_attack, roll_hit_damage_normal,
    CombatStyle, Rng, RollError,
};
use hitsplat::monte_carlo::{sampled_hit_fraction, sampled_hit_fraction_parallel};

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a}");
}

#[test]
fn maxed_melee_loadout_pipeline_golden_values() {
    // Maxed player, boosted, piety-class prayers, aggressive strength stance,
    // against a 135-defence hostile with +20 style defence.
    let effective_strength = effective_level(99, 26, 1.23, CombatStyle::Melee, 3, false);
    assert_eq!(effective_strength, 164);

    let hit = max_hit(effective_strength, 66, 1.0);
    assert_eq!(hit, 33);

    let effective_attack = effective_level(99, 26, 1.20, CombatStyle::Melee, 0, false);
    assert_eq!(effective_attack, 158);

    let attack_roll = max_attack_roll(effective_attack, 67, 1.0);
    assert_eq!(attack_roll, 20698);

    let defence_roll = npc_max_defence_roll(135, 20);
    assert_eq!(defence_roll, 12096);

    // Attack roll exceeds defence roll, so the attacker branch applies.
    let chance = hit_chance(attack_roll, defence_roll);
    approx_eq(chance, 1.0 - 12098.0 / 41398.0, 1e-15);
}

#[test]
fn void_set_boosts_melee_after_the_offset() {
    // 164 from the unboosted path, then x1.1 and a final floor.
    assert_eq!(effective_level(99, 26, 1.23, CombatStyle::Melee, 3, true), 180);
}

#[test]
fn mage_multiplier_ignores_void_flag() {
    // floor((99 + 13) * 1.25) + 8 = 148; 148 * 1.45 -> 214. The magic branch
    // fires with or without void; there is no stacked void+magic bonus.
    let without_void = effective_level(99, 13, 1.25, CombatStyle::Magic, 0, false);
    let with_void = effective_level(99, 13, 1.25, CombatStyle::Magic, 0, true);
    assert_eq!(without_void, 214);
    assert_eq!(with_void, 214);
}

#[test]
fn void_defence_gets_no_multiplier() {
    let plain = effective_level(99, 0, 1.0, CombatStyle::Defence, 0, false);
    let voided = effective_level(99, 0, 1.0, CombatStyle::Defence, 0, true);
    assert_eq!(plain, voided);
    assert_eq!(plain, 99 + 8);
}

#[test]
fn effective_level_is_monotone_in_base_boost_and_stance() {
    let mut previous = i64::MIN;
    for base_level in 1..=99 {
        let level = effective_level(base_level, 5, 1.15, CombatStyle::Ranged, 0, true);
        assert!(level >= previous, "base_level {base_level} decreased");
        previous = level;
    }

    previous = i64::MIN;
    for boost in -20..=30 {
        let level = effective_level(80, boost, 1.23, CombatStyle::Melee, 3, false);
        assert!(level >= previous, "boost {boost} decreased");
        previous = level;
    }

    previous = i64::MIN;
    for stance_bonus in 0..=3 {
        let level = effective_level(80, 10, 1.2, CombatStyle::Melee, stance_bonus, false);
        assert!(level >= previous, "stance {stance_bonus} decreased");
        previous = level;
    }
}

#[test]
fn rolls_are_monotone_in_level_and_equipment() {
    let mut previous_hit = i64::MIN;
    let mut previous_roll = i64::MIN;
    for level in 1..=200 {
        let hit = max_hit(level, 66, 1.0);
        let roll = max_attack_roll(level, 67, 1.0);
        assert!(hit >= previous_hit && roll >= previous_roll, "level {level}");
        previous_hit = hit;
        previous_roll = roll;
    }

    previous_hit = i64::MIN;
    previous_roll = i64::MIN;
    for bonus in -10..=120 {
        let hit = max_hit(118, bonus, 1.0);
        let roll = max_attack_roll(118, bonus, 1.0);
        assert!(hit >= previous_hit && roll >= previous_roll, "bonus {bonus}");
        previous_hit = hit;
        previous_roll = roll;
    }
}

#[test]
fn max_hit_keeps_both_floors_separate() {
    // 21640 / 640 = 33.8125 floors to 33 before the target bonus; a fused
    // computation would give floor(33.8125 * 1.2) = 40 instead of 39.
    assert_eq!(max_hit(164, 66, 1.2), 39);
}

#[test]
fn defence_rolls_clamp_but_max_hit_does_not() {
    assert_eq!(npc_max_defence_roll(-20, -70), 0);
    assert_eq!(player_max_defence_roll(-50, 10), 0);
    assert_eq!(max_attack_roll(-50, 10, 1.0), 0);
    // max_hit is the one formula without a clamp.
    assert_eq!(max_hit(-10, 0, 1.0), -1);
}

#[test]
fn magic_defence_blends_seventy_thirty() {
    // floor(120 * 0.3) = 36, floor(floor(108 * 1.25) * 0.7) = 94,
    // (94 + 36) * (80 + 64) = 18720.
    assert_eq!(player_max_magic_defence_roll(99, 9, 120, 80, 1.25), 18720);
    // Default-prayer equivalent of the same stats.
    assert_eq!(
        player_max_magic_defence_roll(99, 9, 120, 80, 1.0),
        (75 + 36) * 144
    );
}

#[test]
fn hit_chance_is_a_probability_for_all_roll_pairs() {
    let rolls = [0, 1, 2, 5, 100, 12_096, 20_698, 1_000_000];
    for &attack in &rolls {
        for &defence in &rolls {
            let chance = hit_chance(attack, defence);
            assert!(
                (0.0..=1.0).contains(&chance),
                "hit_chance({attack}, {defence}) = {chance} out of bounds"
            );
        }
    }
}

#[test]
fn equal_rolls_take_the_defender_branch_exactly() {
    assert_eq!(hit_chance(100, 100), 100.0 / 202.0);
}

#[test]
fn sampled_fraction_converges_to_closed_form() {
    let iterations = 200_000;

    let sampled = sampled_hit_fraction(20_698, 12_096, iterations, 7).unwrap();
    approx_eq(sampled, hit_chance(20_698, 12_096), 0.01);

    let sampled = sampled_hit_fraction(100, 100, iterations, 3).unwrap();
    approx_eq(sampled, hit_chance(100, 100), 0.01);

    let sampled = sampled_hit_fraction_parallel(20_698, 12_096, iterations, 11).unwrap();
    approx_eq(sampled, hit_chance(20_698, 12_096), 0.01);
}

#[test]
fn roll_attack_is_reproducible_for_a_seed() {
    let mut first = Rng::new(1234);
    let mut second = Rng::new(1234);
    for _ in 0..50 {
        assert_eq!(
            roll_attack(&mut first, 20_698, 12_096),
            roll_attack(&mut second, 20_698, 12_096)
        );
    }
}

#[test]
fn damage_rolls_cover_the_half_open_range() {
    let mut rng = Rng::new(77);
    let mut seen_zero = false;
    let mut seen_top = false;
    for _ in 0..10_000 {
        let damage = roll_hit_damage_normal(&mut rng, 33).unwrap();
        assert!((0..33).contains(&damage));
        seen_zero |= damage == 0;
        seen_top |= damage == 32;
    }
    assert!(seen_zero && seen_top, "10k draws should cover both ends");
}

#[test]
fn degenerate_zero_ranges_fail_fast() {
    let mut rng = Rng::new(9);
    assert_eq!(roll_attack(&mut rng, 0, 12_096), Err(RollError { bound: 0 }));
    assert_eq!(roll_attack(&mut rng, 20_698, 0), Err(RollError { bound: 0 }));
    assert_eq!(roll_hit_damage_normal(&mut rng, 0), Err(RollError { bound: 0 }));
    assert_eq!(
        sampled_hit_fraction(-1, 10, 100, 0),
        Err(RollError { bound: -1 })
    );
}

#[test]
fn deterministic_operations_are_pure() {
    assert_eq!(
        effective_level(73, 4, 1.08, CombatStyle::Ranged, 0, true),
        effective_level(73, 4, 1.08, CombatStyle::Ranged, 0, true)
    );
    assert_eq!(max_hit(118, 85, 1.15), max_hit(118, 85, 1.15));
    assert_eq!(hit_chance(4321, 8765), hit_chance(4321, 8765));
}
