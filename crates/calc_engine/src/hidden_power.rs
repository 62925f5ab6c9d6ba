//! Hidden Power type and base power from individual values.

use crate::core_data::{Stat, StatTable, Type};
use crate::generations::GenMechanics;
use crate::stats::GeneticParameters;
use serde::{Deserialize, Serialize};

/// Type order shared by the modern and legacy index formulas.
const TYPES: [Type; 16] = [
    Type::Fighting,
    Type::Flying,
    Type::Poison,
    Type::Ground,
    Type::Rock,
    Type::Bug,
    Type::Ghost,
    Type::Steel,
    Type::Fire,
    Type::Water,
    Type::Grass,
    Type::Electric,
    Type::Psychic,
    Type::Ice,
    Type::Dragon,
    Type::Dark,
];

/// Bit weight of each stat in the modern sums.
const WEIGHTS: [(Stat, u32); 6] = [
    (Stat::Hp, 1),
    (Stat::Atk, 2),
    (Stat::Def, 4),
    (Stat::Spe, 8),
    (Stat::Spa, 16),
    (Stat::Spd, 32),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenPower {
    #[serde(rename = "type")]
    pub move_type: Type,
    pub base_power: u32,
}

/// Hidden Power for these genetics, or `None` in Gen 1.
pub fn hidden_power<G: GenMechanics>(genetics: &GeneticParameters, gen: &G) -> Option<HiddenPower> {
    match gen.gen_num() {
        1 => None,
        2 => Some(legacy(&genetics.legacy_parts().0)),
        n => {
            let (_, ivs, _) = genetics.modern_parts();
            Some(modern(&ivs, n))
        }
    }
}

fn bit_sum(ivs: &StatTable<u8>, shift: u8) -> u32 {
    WEIGHTS
        .iter()
        .map(|&(stat, weight)| ((ivs[stat] >> shift) & 1) as u32 * weight)
        .sum()
}

/// Gen 3+: type from the low bits, power from the second bits
/// (fixed at 60 from Gen 6).
pub fn modern(ivs: &StatTable<u8>, gen: u8) -> HiddenPower {
    let index = bit_sum(ivs, 0) * 15 / 63;
    let base_power = if gen >= 6 { 60 } else { bit_sum(ivs, 1) * 40 / 63 + 30 };
    HiddenPower {
        move_type: TYPES[index as usize],
        base_power,
    }
}

/// Gen 2: type from the Attack and Defense DVs, power from the top bits
/// of Special, Speed, Defense and Attack.
pub fn legacy(dvs: &StatTable<u8>) -> HiddenPower {
    let atk = dvs[Stat::Atk] as u32;
    let def = dvs[Stat::Def] as u32;
    let spe = dvs[Stat::Spe] as u32;
    let spc = dvs[Stat::Spa] as u32;

    let index = 4 * (atk % 4) + def % 4;
    let top = (spc >> 3) + 2 * (spe >> 3) + 4 * (def >> 3) + 8 * (atk >> 3);
    let base_power = (5 * top + (spc % 4).min(3)) / 2 + 31;
    HiddenPower {
        move_type: TYPES[index as usize],
        base_power,
    }
}
