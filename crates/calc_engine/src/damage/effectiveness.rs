//! Type effectiveness with the immunity overrides the calculator honours.
//!
//! - Ring Target removes the holder's type immunities
//! - A grounded Flying type (Gravity, Iron Ball) takes Ground moves neutrally
//! - Scrappy / Mind's Eye let Normal and Fighting moves hit Ghost

use crate::abilities::{AbilityData, AbilityTraits};
use crate::core_data::Type;
use crate::generations::GenMechanics;
use crate::modifiers::Modifier;
use crate::types::{multiplier_with, single_effectiveness, Effectiveness, TypeSet};

/// Situational switches on the defender's immunities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmunityOverrides {
    pub hits_ghost: bool,
    pub ring_target: bool,
    pub defender_grounded: bool,
}

pub fn move_effectiveness<G: GenMechanics>(
    gen: &G,
    move_type: Type,
    defender: &TypeSet,
    overrides: ImmunityOverrides,
) -> Effectiveness {
    let generation = gen.generation();
    multiplier_with(move_type, defender, |t| {
        let base = single_effectiveness(generation, move_type, t);
        if !base.is_immune() {
            return base;
        }
        if overrides.ring_target {
            return Effectiveness::NEUTRAL;
        }
        if move_type == Type::Ground && t == Type::Flying && overrides.defender_grounded {
            return Effectiveness::NEUTRAL;
        }
        if overrides.hits_ghost && t == Type::Ghost && matches!(move_type, Type::Normal | Type::Fighting) {
            return Effectiveness::NEUTRAL;
        }
        base
    })
}

/// Move type after Normalize or an -ate ability, plus the power boost that
/// comes with the change (1.3x in Gen 6, 1.2x from Gen 7).
pub fn resolve_move_type(listed: Type, ability: &AbilityData, gen: u8) -> (Type, Option<Modifier>) {
    let boost = match gen {
        0..=5 => None,
        6 => Some(Modifier::ONE_POINT_THREE),
        _ => Some(Modifier::ONE_POINT_TWO),
    };
    if ability.normalize {
        // Normalize only gained its boost in Gen 7
        return (Type::Normal, boost.filter(|_| gen >= 7));
    }
    match ability.ate {
        Some(t) if listed == Type::Normal => (t, boost),
        _ => (listed, None),
    }
}

/// Whether the defender's ability stops the move outright.
///
/// Levitate's Ground immunity lapses while the holder is grounded; Wonder
/// Guard lets only super-effective hits through.
pub fn ability_blocks(ability: &AbilityData, move_type: Type, effectiveness: Effectiveness, grounded: bool) -> bool {
    if ability.has(AbilityTraits::WONDER_GUARD) && !effectiveness.is_super_effective() {
        return true;
    }
    match ability.immune_to {
        Some(Type::Ground) if ability.has(AbilityTraits::LEVITATE) => move_type == Type::Ground && !grounded,
        Some(t) => t == move_type,
        None => false,
    }
}
