use super::context::Combatant;
use crate::abilities::AbilityTraits;
use crate::core_data::Stat;
use crate::generations::{gen1_crit_chance, GenMechanics};
use crate::items::ItemTraits;
use crate::moves::Move;

/// Whether a hit crits, as far as it can be known before the roll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CritOutcome {
    pub guaranteed: bool,
    pub chance: f64,
}

impl CritOutcome {
    const NEVER: Self = Self {
        guaranteed: false,
        chance: 0.0,
    };

    const ALWAYS: Self = Self {
        guaranteed: true,
        chance: 1.0,
    };
}

pub fn crit_outcome<G: GenMechanics>(
    gen: &G,
    mv: &Move,
    attacker: &Combatant<'_>,
    defender: &Combatant<'_>,
) -> CritOutcome {
    if defender.has_trait(AbilityTraits::BLOCKS_CRITS) {
        return CritOutcome::NEVER;
    }
    if mv.always_crit {
        return CritOutcome::ALWAYS;
    }
    if attacker.has_trait(AbilityTraits::CRIT_VS_POISONED) && defender.snapshot.status.is_poisoned() {
        return CritOutcome::ALWAYS;
    }

    if gen.gen_num() == 1 {
        let chance = gen1_crit_chance(attacker.snapshot.base_stats[Stat::Spe], mv.crit_stage > 0);
        return CritOutcome {
            guaranteed: false,
            chance,
        };
    }

    let mut stage = mv.crit_stage;
    if attacker.has_trait(AbilityTraits::CRIT_STAGE) {
        stage += 1;
    }
    if attacker.held.item().has(ItemTraits::CRIT_STAGE) {
        stage += 1;
    }
    match gen.guaranteed_crit_stage() {
        Some(sure) if stage >= sure => CritOutcome::ALWAYS,
        _ => CritOutcome {
            guaranteed: false,
            chance: gen.crit_chance(stage),
        },
    }
}
