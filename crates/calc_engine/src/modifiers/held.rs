//! Ability and held item of one creature, resolved to registry entries.

use super::{Holder, ModifierEntry, Rule, RuleContext, Stage};
use crate::abilities::{AbilityData, AbilityId, AbilityTraits};
use crate::creature::CreatureSnapshot;
use crate::error::CalcWarning;
use crate::generations::GenMechanics;
use crate::items::registry::type_boost_rule;
use crate::items::{ItemData, ItemId};

/// A creature's ability and item after id lookup and generation gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeldEffects {
    pub ability: AbilityId,
    pub item: ItemId,
}

impl Default for HeldEffects {
    fn default() -> Self {
        Self {
            ability: AbilityId::NoAbility,
            item: ItemId::NoItem,
        }
    }
}

impl HeldEffects {
    /// Look up the snapshot's ability and item.
    ///
    /// Unknown identifiers resolve to "none" and push a warning. Abilities
    /// before Gen 3 and items in Gen 1 are ignored silently.
    pub fn resolve<G: GenMechanics>(
        snapshot: &CreatureSnapshot,
        gen: &G,
        warnings: &mut Vec<CalcWarning>,
    ) -> Self {
        let mut held = Self::default();

        if gen.has_abilities() {
            if let Some(name) = snapshot.ability.as_deref() {
                match AbilityId::from_str(name) {
                    Some(id) => held.ability = id,
                    None => warnings.push(CalcWarning::UnknownAbility(name.to_string()).emit()),
                }
            }
        }

        if gen.has_held_items() {
            if let Some(name) = snapshot.item.as_deref() {
                match ItemId::from_str(name) {
                    Some(id) => held.item = id,
                    None => warnings.push(CalcWarning::UnknownItem(name.to_string()).emit()),
                }
            }
        }

        if held.ability().has(AbilityTraits::SUPPRESSES_ITEM) {
            held.item = ItemId::NoItem;
        }
        held
    }

    pub fn ability(&self) -> &'static AbilityData {
        self.ability.data()
    }

    pub fn item(&self) -> &'static ItemData {
        self.item.data()
    }

    /// Mold Breaker and friends switch the target's ability off.
    pub fn without_ability(mut self) -> Self {
        self.ability = AbilityId::NoAbility;
        self
    }

    /// Pipeline entries of every rule that fires for `stage` and `holder`.
    ///
    /// With `move_independent` set, rules whose condition needs a move are
    /// skipped.
    pub fn entries(
        &self,
        stage: Stage,
        holder: Holder,
        ctx: &RuleContext<'_>,
        gen: u8,
        move_independent: bool,
    ) -> Vec<ModifierEntry> {
        let usable = |rule: &&Rule| !move_independent || rule.when.is_move_independent();

        let mut out: Vec<ModifierEntry> = self
            .ability()
            .rules
            .iter()
            .filter(usable)
            .filter_map(|rule| rule.entry(stage, holder, false, ctx, "ability"))
            .collect();

        out.extend(
            self.item()
                .rules
                .iter()
                .filter(usable)
                .filter_map(|rule| rule.entry(stage, holder, true, ctx, "item")),
        );

        if let Some(t) = self.item().boosts_type {
            let rule = type_boost_rule(t, gen);
            if usable(&&rule) {
                out.extend(rule.entry(stage, holder, true, ctx, "type boost"));
            }
        }
        out
    }
}
