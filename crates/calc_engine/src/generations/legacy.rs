//! Gen 1-3 specifics that do not fit the trait defaults.

/// Gen 1 critical hit chance from the attacker's base Speed.
///
/// Normal moves: `floor(base / 2) / 256`. High-crit moves multiply the
/// threshold by 8, capped at 255.
pub fn gen1_crit_chance(base_speed: u16, high_crit: bool) -> f64 {
    let threshold = base_speed as u32 / 2;
    let threshold = if high_crit { (threshold * 8).min(255) } else { threshold.min(255) };
    threshold as f64 / 256.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen1_crit_chance() {
        // Persian, base 115
        assert_eq!(gen1_crit_chance(115, false), 57.0 / 256.0);
        assert_eq!(gen1_crit_chance(115, true), 255.0 / 256.0);
        assert_eq!(gen1_crit_chance(20, true), 80.0 / 256.0);
    }
}
