//! Core damage formula and math utilities.
//!
//! Integer arithmetic with the game's truncation and rounding behaviour.
//! Floats never appear here.

/// 32-bit overflow wrapping (simulates hardware behavior).
#[inline]
pub const fn of32(value: u64) -> u32 {
    (value & 0xFFFF_FFFF) as u32
}

/// The game's rounding function ("pokeRound").
///
/// The fractional part > 0.5 rounds up, otherwise rounds down,
/// so an exact 0.5 rounds DOWN.
#[inline]
pub fn pokeround(value: u32, divisor: u32) -> u32 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder > divisor / 2 {
        quotient + 1
    } else {
        quotient
    }
}

/// `pokeround(value * modifier / 4096)`
#[inline]
pub fn apply_modifier(value: u32, modifier: u16) -> u32 {
    if modifier == 4096 {
        return value;
    }
    let product = of32(value as u64 * modifier as u64);
    pokeround(product, 4096)
}

/// Calculate base damage before modifiers.
///
/// Formula: `floor(floor(floor(2 * Level / 5 + 2) * BasePower * Attack / Defense) / 50) + 2`
///
/// Each intermediate step is truncated.
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> u32 {
    if defense == 0 {
        return 0;
    }

    let level_factor = 2 * level / 5 + 2;

    let numerator = of32(level_factor as u64 * base_power as u64);
    let numerator = of32(numerator as u64 * attack as u64);
    let after_defense = numerator / defense;
    let after_50 = after_defense / 50;

    after_50 + 2
}

/// Number of entries in a roll table.
pub const ROLL_COUNT: usize = 16;

/// Damage for one random roll: `floor(damage * (100 - n) / 100)`.
///
/// `roll_index` 0 is the 85% roll, 15 the 100% roll.
#[inline]
pub fn apply_random_roll(damage: u32, roll_index: u8) -> u32 {
    let roll = 85 + (roll_index.min(15) as u32);
    of32(damage as u64 * roll as u64) / 100
}

/// All 16 rolls, ascending.
pub fn get_all_rolls(damage: u32) -> [u32; ROLL_COUNT] {
    let mut rolls = [0u32; ROLL_COUNT];
    for (i, roll) in rolls.iter_mut().enumerate() {
        *roll = apply_random_roll(damage, i as u8);
    }
    rolls
}

/// Boost multiplier table.
///
/// Index 0 = -6, Index 6 = 0, Index 12 = +6
/// Each entry is (numerator, denominator).
pub const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6
    (2, 7), // -5
    (2, 6), // -4
    (2, 5), // -3
    (2, 4), // -2
    (2, 3), // -1
    (2, 2), //  0
    (3, 2), // +1
    (4, 2), // +2
    (5, 2), // +3
    (6, 2), // +4
    (7, 2), // +5
    (8, 2), // +6
];

/// Ratio for a boost stage, clamped to -6..=+6.
#[inline]
pub fn boost_ratio(stage: i8) -> (u32, u32) {
    let stage = stage.clamp(-6, 6);
    BOOST_TABLE[(stage + 6) as usize]
}

/// Apply stat boost stage to a stat.
pub fn apply_boost(stat: u32, stage: i8) -> u32 {
    let (num, den) = boost_ratio(stage);
    of32(stat as u64 * num as u64) / den
}

/// Gen 1-2 stat stage table, in percent.
const LEGACY_BOOST_PERCENT: [u32; 13] = [25, 28, 33, 40, 50, 66, 100, 150, 200, 250, 300, 350, 400];

/// Apply a Gen 1-2 boost stage. The result is capped at 999.
pub fn apply_legacy_boost(stat: u32, stage: i8) -> u32 {
    let stage = stage.clamp(-6, 6);
    let pct = LEGACY_BOOST_PERCENT[(stage + 6) as usize];
    (stat * pct / 100).clamp(1, 999)
}

/// Integer ceiling square root.
pub fn ceil_sqrt(value: u32) -> u32 {
    if value == 0 {
        return 0;
    }
    let mut root = (value as f64).sqrt() as u32;
    while root * root > value {
        root -= 1;
    }
    while root * root < value {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of32() {
        assert_eq!(of32(100), 100);
        assert_eq!(of32(0xFFFF_FFFF), 0xFFFF_FFFF);
        assert_eq!(of32(0x1_0000_0000), 0);
    }

    #[test]
    fn test_apply_modifier() {
        assert_eq!(apply_modifier(100, 4096), 100);
        assert_eq!(apply_modifier(100, 6144), 150);
        assert_eq!(apply_modifier(100, 2048), 50);
        assert_eq!(apply_modifier(100, 8192), 200);
    }

    #[test]
    fn test_base_damage() {
        // floor(floor(22 * 90 * 100 / 100) / 50) + 2 = 41
        assert_eq!(get_base_damage(50, 90, 100, 100), 41);
        // floor(floor(42 * 90 * 100 / 100) / 50) + 2 = 77
        assert_eq!(get_base_damage(100, 90, 100, 100), 77);
        assert_eq!(get_base_damage(100, 90, 100, 0), 0);
    }

    #[test]
    fn test_random_rolls() {
        let rolls = get_all_rolls(100);
        assert_eq!(rolls[0], 85);
        assert_eq!(rolls[15], 100);
        assert!(rolls.windows(2).all(|w| w[0] <= w[1]));

        // 170 -> 144..=170
        let rolls = get_all_rolls(170);
        assert_eq!(rolls[0], 144);
        assert_eq!(rolls[15], 170);
    }

    #[test]
    fn test_boost_application() {
        assert_eq!(apply_boost(100, 0), 100);
        assert_eq!(apply_boost(100, 1), 150);
        assert_eq!(apply_boost(100, 6), 400);
        assert_eq!(apply_boost(100, -1), 66);
        assert_eq!(apply_boost(100, -6), 25);
        // Clamped
        assert_eq!(apply_boost(100, 9), 400);
    }

    #[test]
    fn test_legacy_boost_caps_at_999() {
        assert_eq!(apply_legacy_boost(300, 6), 999);
        assert_eq!(apply_legacy_boost(100, -1), 66);
    }

    #[test]
    fn test_pokeround() {
        // Exact 0.5 rounds DOWN
        assert_eq!(pokeround(2048, 4096), 0);
        assert_eq!(pokeround(2049, 4096), 1);
        assert_eq!(pokeround(4096, 4096), 1);
        assert_eq!(pokeround(6144, 4096), 1);
        assert_eq!(pokeround(6145, 4096), 2);
        assert_eq!(pokeround(8192, 4096), 2);

        assert_eq!(pokeround(5, 10), 0);
        assert_eq!(pokeround(6, 10), 1);
        assert_eq!(pokeround(15, 10), 1);
        assert_eq!(pokeround(16, 10), 2);
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(65025), 255);
        assert_eq!(ceil_sqrt(65026), 256);
        assert_eq!(ceil_sqrt(65535), 256);
    }
}
