//! Effective base power and fixed damage.
//!
//! Runs before ability and item base-power rules (Technician sees the
//! doubled Facade power, not the listed one).

use super::registry::{FixedDamage, VariablePower};
use crate::core_data::{Stat, Type};
use crate::creature::{CreatureSnapshot, Status};
use crate::damage::formula::apply_modifier;
use crate::hidden_power;
use crate::modifiers::Modifier;

/// Battle facts a variable-power move reads.
#[derive(Clone, Copy, Debug)]
pub struct PowerInputs<'a> {
    pub attacker: &'a CreatureSnapshot,
    pub defender: &'a CreatureSnapshot,
    pub attacker_hp: u16,
    pub attacker_max_hp: u16,
    pub defender_hp: u16,
    pub defender_max_hp: u16,
    pub attacker_speed: u32,
    pub defender_speed: u32,
    /// After Klutz and generation gating
    pub attacker_has_item: bool,
    pub defender_has_item: bool,
    pub gen: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedPower {
    pub base_power: u32,
    /// Hidden Power replaces the move's type
    pub move_type: Option<Type>,
}

impl ResolvedPower {
    const fn power(base_power: u32) -> Self {
        Self {
            base_power,
            move_type: None,
        }
    }
}

/// Damage dealt by a fixed-damage move, before immunities.
pub fn fixed_damage(kind: FixedDamage, inputs: &PowerInputs<'_>) -> u32 {
    match kind {
        FixedDamage::Level => inputs.attacker.level as u32,
        FixedDamage::Constant(n) => n as u32,
        FixedDamage::HalfTargetHp => (inputs.defender_hp as u32 / 2).max(1),
        FixedDamage::UserHp => inputs.attacker_hp as u32,
        FixedDamage::Endeavor => inputs.defender_hp.saturating_sub(inputs.attacker_hp) as u32,
    }
}

/// Base power of a variable-power move. `listed` is kept when the inputs
/// the move needs (a weight) are missing.
pub fn variable_power(kind: VariablePower, listed: u32, inputs: &PowerInputs<'_>) -> ResolvedPower {
    let attacker = inputs.attacker;
    let defender = inputs.defender;
    let doubled_if = |cond: bool| if cond { listed * 2 } else { listed };

    let base_power = match kind {
        VariablePower::UserHpHigh => {
            (150 * inputs.attacker_hp as u32 / (inputs.attacker_max_hp as u32).max(1)).max(1)
        }
        VariablePower::UserHpLow => {
            let p = 48 * inputs.attacker_hp as u32 / (inputs.attacker_max_hp as u32).max(1);
            match p {
                0..=1 => 200,
                2..=4 => 150,
                5..=9 => 100,
                10..=16 => 80,
                17..=32 => 40,
                _ => 20,
            }
        }
        VariablePower::TargetWeight => match defender.weight_hg {
            Some(w) if w >= 2000 => 120,
            Some(w) if w >= 1000 => 100,
            Some(w) if w >= 500 => 80,
            Some(w) if w >= 250 => 60,
            Some(w) if w >= 100 => 40,
            Some(_) => 20,
            None => listed,
        },
        VariablePower::WeightRatio => match (attacker.weight_hg, defender.weight_hg) {
            (Some(a), Some(d)) => {
                let d = d.max(1);
                if a >= 5 * d {
                    120
                } else if a >= 4 * d {
                    100
                } else if a >= 3 * d {
                    80
                } else if a >= 2 * d {
                    60
                } else {
                    40
                }
            }
            _ => listed,
        },
        VariablePower::GyroBall => {
            (25 * inputs.defender_speed / inputs.attacker_speed.max(1) + 1).min(150)
        }
        VariablePower::ElectroBall => {
            let ratio = inputs.attacker_speed / inputs.defender_speed.max(1);
            match ratio {
                0 => 40,
                1 => 60,
                2 => 80,
                3 => 120,
                _ => 150,
            }
        }
        VariablePower::PositiveBoosts => {
            let stages: u32 = Stat::BATTLE.iter().map(|&s| attacker.boosts[s].max(0) as u32).sum();
            20 + 20 * stages
        }
        VariablePower::Acrobatics => doubled_if(!inputs.attacker_has_item),
        VariablePower::Facade => doubled_if(matches!(
            attacker.status,
            Status::Burn | Status::Paralysis | Status::Poison | Status::Toxic
        )),
        VariablePower::Hex => doubled_if(defender.status != Status::None),
        VariablePower::Venoshock => doubled_if(defender.status.is_poisoned()),
        VariablePower::Brine => {
            doubled_if(inputs.defender_hp as u32 * 2 <= inputs.defender_max_hp as u32)
        }
        VariablePower::KnockOff => {
            if inputs.gen >= 6 && inputs.defender_has_item {
                apply_modifier(listed, Modifier::ONE_POINT_FIVE.val())
            } else {
                listed
            }
        }
        VariablePower::HiddenPower => {
            let hp = match inputs.gen {
                1 => return ResolvedPower::power(listed),
                2 => hidden_power::legacy(&attacker.genetics.legacy_parts().0),
                n => hidden_power::modern(&attacker.genetics.modern_parts().1, n),
            };
            return ResolvedPower {
                base_power: hp.base_power,
                move_type: Some(hp.move_type),
            };
        }
        VariablePower::Friendship => 102,
    };
    ResolvedPower::power(base_power)
}
