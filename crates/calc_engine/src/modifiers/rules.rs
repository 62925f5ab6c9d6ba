//! Declarative modifier rules.
//!
//! Abilities and items are described as data: each [`Rule`] names the value it
//! modifies, whose effect it is, when it fires, and what it does. The damage
//! calculator turns matching rules into [`ModifierEntry`] values; nothing here
//! branches on identifiers.

use super::{Effect, ExclusiveGroup, ModifierEntry, Phase, Stacking};
use crate::core_data::{MoveCategory, MoveFlags, Type};
use crate::creature::Status;
use crate::field::Weather;

/// Which intermediate value a rule modifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    BasePower,
    Attack,
    Defense,
    /// Only read by final stat display
    Speed,
    Damage,
}

/// Whose ability or item the rule belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Holder {
    Attacker,
    Defender,
}

/// Closed set of rule preconditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Always,
    Physical,
    Special,
    MoveType(Type),
    MoveTypeIn(&'static [Type]),
    MoveFlag(MoveFlags),
    BasePowerAtMost(u32),
    /// Holder has any non-volatile status
    HolderStatused,
    HolderFullHp,
    /// Holder at or below 1/3 of max HP
    HolderPinch,
    HolderSpecies(&'static [&'static str]),
    HolderNotFullyEvolved,
    SuperEffective,
    NotVeryEffective,
    Critical,
    Sun,
    Rain,
    Sand,
    Snow,
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

/// Facts about the rule holder.
#[derive(Clone, Copy, Debug)]
pub struct HolderFacts<'a> {
    pub species: &'a str,
    pub status: Status,
    pub current_hp: u16,
    pub max_hp: u16,
    pub not_fully_evolved: bool,
}

/// Everything a [`Condition`] may inspect.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub category: MoveCategory,
    pub move_type: Type,
    pub flags: MoveFlags,
    pub base_power: u32,
    /// 4-scale effectiveness (4 = neutral)
    pub effectiveness: u8,
    pub is_crit: bool,
    pub weather: Weather,
    pub holder: HolderFacts<'a>,
}

impl Condition {
    pub fn holds(&self, ctx: &RuleContext<'_>) -> bool {
        match *self {
            Condition::Always => true,
            Condition::Physical => ctx.category == MoveCategory::Physical,
            Condition::Special => ctx.category == MoveCategory::Special,
            Condition::MoveType(t) => ctx.move_type == t,
            Condition::MoveTypeIn(types) => types.contains(&ctx.move_type),
            Condition::MoveFlag(flag) => ctx.flags.contains(flag),
            Condition::BasePowerAtMost(bp) => ctx.base_power <= bp,
            Condition::HolderStatused => ctx.holder.status != Status::None,
            Condition::HolderFullHp => {
                ctx.holder.max_hp > 0 && ctx.holder.current_hp >= ctx.holder.max_hp
            }
            Condition::HolderPinch => {
                (ctx.holder.current_hp as u32) * 3 <= ctx.holder.max_hp as u32
            }
            Condition::HolderSpecies(names) => names.contains(&ctx.holder.species),
            Condition::HolderNotFullyEvolved => ctx.holder.not_fully_evolved,
            Condition::SuperEffective => ctx.effectiveness > 4,
            Condition::NotVeryEffective => ctx.effectiveness > 0 && ctx.effectiveness < 4,
            Condition::Critical => ctx.is_crit,
            Condition::Sun => ctx.weather.is_sun(),
            Condition::Rain => ctx.weather.is_rain(),
            Condition::Sand => ctx.weather == Weather::Sand,
            Condition::Snow => matches!(ctx.weather, Weather::Snow | Weather::Hail),
            Condition::All(all) => all.iter().all(|c| c.holds(ctx)),
            Condition::Any(any) => any.iter().any(|c| c.holds(ctx)),
        }
    }

    /// True when the condition can be judged without a move, as in the
    /// final stat display.
    pub fn is_move_independent(&self) -> bool {
        match *self {
            Condition::MoveType(_)
            | Condition::MoveTypeIn(_)
            | Condition::MoveFlag(_)
            | Condition::BasePowerAtMost(_)
            | Condition::SuperEffective
            | Condition::NotVeryEffective
            | Condition::Critical => false,
            Condition::All(all) | Condition::Any(all) => all.iter().all(Condition::is_move_independent),
            _ => true,
        }
    }
}

/// One declarative ability or item effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub stage: Stage,
    pub holder: Holder,
    pub when: Condition,
    pub effect: Effect,
    pub stacking: Stacking,
}

impl Rule {
    pub const fn attacker(stage: Stage, when: Condition, effect: Effect) -> Self {
        Self {
            stage,
            holder: Holder::Attacker,
            when,
            effect,
            stacking: Stacking::Compound,
        }
    }

    pub const fn defender(stage: Stage, when: Condition, effect: Effect) -> Self {
        Self {
            stage,
            holder: Holder::Defender,
            when,
            effect,
            stacking: Stacking::Compound,
        }
    }

    pub const fn exclusive(mut self, group: ExclusiveGroup) -> Self {
        self.stacking = Stacking::Exclusive(group);
        self
    }

    /// Turn this rule into a pipeline entry if it fires.
    ///
    /// `from_item` picks the Item/FinalItem phases over the ability ones.
    pub fn entry(
        &self,
        stage: Stage,
        holder: Holder,
        from_item: bool,
        ctx: &RuleContext<'_>,
        source: &'static str,
    ) -> Option<ModifierEntry> {
        if self.stage != stage || self.holder != holder || !self.when.holds(ctx) {
            return None;
        }
        let phase = match (stage, from_item) {
            (Stage::Damage, false) => Phase::FinalAbility,
            (Stage::Damage, true) => Phase::FinalItem,
            (_, false) => Phase::Ability,
            (_, true) => Phase::Item,
        };
        Some(ModifierEntry {
            phase,
            effect: self.effect,
            stacking: self.stacking,
            source,
        })
    }
}
