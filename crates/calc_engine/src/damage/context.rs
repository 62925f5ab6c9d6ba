//! One side of a matchup, resolved for the damage formula.

use crate::abilities::AbilityTraits;
use crate::core_data::{MoveCategory, MoveFlags, Stat, StatVector, Type};
use crate::creature::CreatureSnapshot;
use crate::error::{CalcWarning, ValidationError};
use crate::field::{FieldState, Weather};
use crate::generations::GenMechanics;
use crate::items::{ItemId, ItemTraits};
use crate::modifiers::{HeldEffects, HolderFacts, RuleContext};
use crate::stats::{final_stats, project, validate_snapshot};

/// A validated snapshot with its projected stats and resolved
/// ability/item.
#[derive(Clone, Copy, Debug)]
pub struct Combatant<'a> {
    pub snapshot: &'a CreatureSnapshot,
    /// Projected, before boosts and effects
    pub stats: StatVector,
    pub held: HeldEffects,
    pub max_hp: u16,
    pub current_hp: u16,
    /// Displayed speed (boosts, Choice Scarf, paralysis...)
    pub speed: u16,
}

impl<'a> Combatant<'a> {
    pub fn resolve<G: GenMechanics>(
        snapshot: &'a CreatureSnapshot,
        field: &FieldState,
        gen: &G,
        warnings: &mut Vec<CalcWarning>,
    ) -> Result<Self, ValidationError> {
        let constants = gen.constants();
        validate_snapshot(snapshot, &constants)?;
        if let Some(ty) = snapshot.types.iter().find(|&t| !gen.has_type(t)) {
            return Err(ValidationError::TypeNotInGeneration { ty, gen: gen.gen_num() });
        }
        let stats = project(&snapshot.base_stats, snapshot.level, &snapshot.genetics, constants.legacy);
        let held = HeldEffects::resolve(snapshot, gen, warnings);
        let speed = final_stats(snapshot, field, gen)?[Stat::Spe];
        let max_hp = stats[Stat::Hp];
        Ok(Self {
            snapshot,
            stats,
            held,
            max_hp,
            current_hp: snapshot.hp.current_hp(max_hp),
            speed,
        })
    }

    pub fn has_item(&self) -> bool {
        self.held.item != ItemId::NoItem
    }

    pub fn has_trait(&self, t: AbilityTraits) -> bool {
        self.held.ability().has(t)
    }

    /// Touching the ground: explicit override first, then Gravity and Iron
    /// Ball, then Flying type, Levitate and Air Balloon.
    pub fn is_grounded(&self, field: &FieldState) -> bool {
        if let Some(grounded) = self.snapshot.grounded {
            return grounded;
        }
        if field.gravity || self.held.item().has(ItemTraits::GROUNDS) {
            return true;
        }
        !(self.snapshot.has_type(Type::Flying)
            || self.has_trait(AbilityTraits::LEVITATE)
            || self.held.item().has(ItemTraits::LEVITATES))
    }

    pub fn facts(&self) -> HolderFacts<'a> {
        HolderFacts {
            species: &self.snapshot.species,
            status: self.snapshot.status,
            current_hp: self.current_hp,
            max_hp: self.max_hp,
            not_fully_evolved: self.snapshot.not_fully_evolved,
        }
    }
}

/// The move as the formula sees it, after type and category resolution.
#[derive(Clone, Copy, Debug)]
pub struct MoveFacts {
    pub category: MoveCategory,
    pub move_type: Type,
    pub flags: MoveFlags,
    /// Base power after variable-power resolution, before BP modifiers
    pub base_power: u32,
    pub effectiveness: u8,
    pub weather: Weather,
}

impl MoveFacts {
    /// Rule context with `holder` as the rule's owner.
    pub fn rule_context<'a>(&self, holder: &Combatant<'a>, is_crit: bool) -> RuleContext<'a> {
        RuleContext {
            category: self.category,
            move_type: self.move_type,
            flags: self.flags,
            base_power: self.base_power,
            effectiveness: self.effectiveness,
            is_crit,
            weather: self.weather,
            holder: holder.facts(),
        }
    }
}
