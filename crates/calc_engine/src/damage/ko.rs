//! KO chances over repeated uses, with and without entry hazards.

use super::multihit::DamageDistribution;
use crate::core_data::Type;
use crate::field::{SideConditions, SideState};
use crate::generations::GenMechanics;
use crate::types::{multiplier, TypeSet};
use serde::Serialize;

/// Most uses of the move considered for an n-hit KO.
pub const MAX_KO_HITS: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct KoChance {
    /// Uses of the move
    pub hits: u8,
    /// Probability in 0..=1
    pub chance: f64,
}

/// Chance to KO from `hp` within 1..=[`MAX_KO_HITS`] uses.
pub fn n_hit_ko(per_use: &DamageDistribution, hp: u32) -> Vec<KoChance> {
    let mut total = DamageDistribution::certain(0);
    (1..=MAX_KO_HITS)
        .map(|hits| {
            total = total.convolve(per_use);
            KoChance {
                hits,
                chance: total.chance_at_least(hp),
            }
        })
        .collect()
}

/// Entry hazard damage taken on switching in.
///
/// Stealth Rock (Gen 4+) scales with Rock effectiveness; Spikes only hit
/// grounded targets.
pub fn hazard_damage<G: GenMechanics>(
    gen: &G,
    side: &SideState,
    types: &TypeSet,
    max_hp: u16,
    grounded: bool,
) -> u32 {
    let max_hp = max_hp as u32;
    let mut total = 0;
    if gen.gen_num() >= 4 && side.conditions.contains(SideConditions::STEALTH_ROCK) {
        let eff = multiplier(gen.generation(), Type::Rock, types).0 as u32;
        total += max_hp * eff / 32;
    }
    if gen.gen_num() >= 2 && grounded {
        let layers = side.conditions.spikes_layers();
        // Gen 2 only had one layer
        let layers = if gen.gen_num() == 2 { layers.min(1) } else { layers };
        total += match layers {
            0 => 0,
            1 => max_hp / 8,
            2 => max_hp / 6,
            _ => max_hp / 4,
        };
    }
    total
}

/// One-use KO chance after hazards have chipped `hp` down.
pub fn hazard_ko(per_use: &DamageDistribution, hp: u32, hazard: u32) -> f64 {
    if hazard >= hp {
        return 1.0;
    }
    per_use.chance_at_least(hp - hazard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generations::Generation;

    #[test]
    fn test_n_hit_ko() {
        let per_use = DamageDistribution {
            outcomes: vec![(40, 0.5), (60, 0.5)],
        };
        let ko = n_hit_ko(&per_use, 100);
        assert_eq!(ko.len(), 4);
        assert_eq!(ko[0].chance, 0.0);
        // 80 / 100 / 100 / 120
        assert_eq!(ko[1].chance, 0.75);
        assert_eq!(ko[2].chance, 1.0);
        assert_eq!(ko[3], KoChance { hits: 4, chance: 1.0 });
    }

    #[test]
    fn test_hazard_damage() {
        let gen = Generation::Gen9;
        let rocks = SideState {
            conditions: SideConditions::STEALTH_ROCK,
        };
        let charizard = TypeSet::dual(Type::Fire, Type::Flying).unwrap();
        assert_eq!(hazard_damage(&gen, &rocks, &charizard, 297, false), 148);
        let steel = TypeSet::single(Type::Steel);
        assert_eq!(hazard_damage(&gen, &rocks, &steel, 300, true), 18);

        let all = SideState {
            conditions: SideConditions::STEALTH_ROCK | SideConditions::SPIKES_3,
        };
        let normal = TypeSet::single(Type::Normal);
        assert_eq!(hazard_damage(&gen, &all, &normal, 400, true), 50 + 100);
        assert_eq!(hazard_damage(&gen, &all, &normal, 400, false), 50);
        assert_eq!(hazard_damage(&Generation::Gen3, &all, &normal, 400, true), 100);
        assert_eq!(hazard_damage(&Generation::Gen2, &all, &normal, 400, true), 50);
    }

    #[test]
    fn test_hazard_ko() {
        let per_use = DamageDistribution {
            outcomes: vec![(80, 0.5), (90, 0.5)],
        };
        assert_eq!(hazard_ko(&per_use, 100, 0), 0.0);
        assert_eq!(hazard_ko(&per_use, 100, 12), 0.5);
        assert_eq!(hazard_ko(&per_use, 100, 100), 1.0);
    }
}
