pub mod levels;
pub mod resolve;
pub mod rng;
pub mod rolls;

pub use levels::{
    effective_level, CombatStyle, ParseStyleError, EFFECTIVE_LEVEL_OFFSET, MAGE_MULTIPLIER,
    VOID_MULTIPLIER,
};
pub use resolve::{hit_chance, roll_attack, roll_hit_damage_normal, RollError};
pub use rng::Rng;
pub use rolls::{
    max_attack_roll, max_hit, npc_max_defence_roll, player_max_defence_roll,
    player_max_magic_defence_roll,
};
