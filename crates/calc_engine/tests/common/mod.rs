//! Shared builders for the integration tests.

#![allow(dead_code)]

use calc_engine::{CreatureSnapshot, GeneticParameters, NatureId, SideId, Type, TypeSet};

pub const GARCHOMP: [u16; 6] = [108, 130, 95, 80, 85, 102];
pub const MEWTWO: [u16; 6] = [106, 110, 90, 154, 90, 130];

/// Jolly 252 Atk / 4 Def / 252 Spe: 357/359/227/176/206/333 at L100.
pub fn jolly_garchomp() -> GeneticParameters {
    GeneticParameters::modern(NatureId::Jolly, [31; 6], [0, 252, 4, 0, 0, 252])
}

pub fn garchomp() -> CreatureSnapshot {
    let types = TypeSet::dual(Type::Dragon, Type::Ground).unwrap();
    CreatureSnapshot::new("garchomp", GARCHOMP, types).genetics(jolly_garchomp())
}

/// Hardy, 31 IVs, 0 EVs, L100: 300 Atk.
pub fn reference_attacker() -> CreatureSnapshot {
    CreatureSnapshot::new("attacker", [100, 132, 100, 100, 100, 100], TypeSet::single(Type::Normal))
}

/// Hardy, 31 IVs, 0 EVs, L100: 341 HP, 150 Def.
pub fn reference_defender() -> CreatureSnapshot {
    CreatureSnapshot::new("defender", [100, 100, 57, 100, 100, 100], TypeSet::single(Type::Normal)).side(SideId::P2)
}
