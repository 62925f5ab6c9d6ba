//! Displayed battle stats: projection, boosts, and the stat-altering
//! ability, item, status and field effects that do not depend on a move.

use super::{project, validate_snapshot};
use crate::abilities::AbilityTraits;
use crate::core_data::{MoveCategory, MoveFlags, Stat, StatVector, Type};
use crate::creature::{CreatureSnapshot, Status};
use crate::damage::formula::{apply_boost, apply_legacy_boost};
use crate::error::ValidationError;
use crate::field::{FieldState, SideConditions};
use crate::generations::GenMechanics;
use crate::modifiers::{
    Effect, HeldEffects, Holder, HolderFacts, ModifierChain, ModifierEntry, Phase, RuleContext, Stage,
};

/// Stats as a battle overlay would show them (Choice Scarf speed,
/// paralysis cut, Huge Power attack...). HP is the projected max HP.
pub fn final_stats<G: GenMechanics>(
    snapshot: &CreatureSnapshot,
    field: &FieldState,
    gen: &G,
) -> Result<StatVector, ValidationError> {
    let constants = gen.constants();
    validate_snapshot(snapshot, &constants)?;

    let raw = project(&snapshot.base_stats, snapshot.level, &snapshot.genetics, constants.legacy);
    let mut warnings = Vec::new();
    let held = HeldEffects::resolve(snapshot, gen, &mut warnings);

    let max_hp = raw[Stat::Hp];
    let holder = HolderFacts {
        species: &snapshot.species,
        status: snapshot.status,
        current_hp: snapshot.hp.current_hp(max_hp),
        max_hp,
        not_fully_evolved: snapshot.not_fully_evolved,
    };
    let side = field.side(snapshot.side);

    Ok(raw.map(|stat, value| {
        let (stage, role, category) = match stat {
            Stat::Hp => return value,
            Stat::Atk => (Stage::Attack, Holder::Attacker, MoveCategory::Physical),
            Stat::Spa => (Stage::Attack, Holder::Attacker, MoveCategory::Special),
            Stat::Def => (Stage::Defense, Holder::Defender, MoveCategory::Physical),
            Stat::Spd => (Stage::Defense, Holder::Defender, MoveCategory::Special),
            Stat::Spe => (Stage::Speed, Holder::Attacker, MoveCategory::Physical),
        };
        let ctx = RuleContext {
            category,
            move_type: Type::Normal,
            flags: MoveFlags::empty(),
            base_power: 0,
            effectiveness: 4,
            is_crit: false,
            weather: field.weather,
            holder,
        };

        let boost = snapshot.boosts[stat];
        let boosted = if constants.legacy {
            apply_legacy_boost(value as u32, boost)
        } else {
            apply_boost(value as u32, boost)
        };

        let mut chain = ModifierChain::new();
        chain.extend(held.entries(stage, role, &ctx, gen.gen_num(), true));

        match stat {
            Stat::Spe => {
                if snapshot.status == Status::Paralysis
                    && !held.ability().has(AbilityTraits::IGNORES_PARALYSIS_SPEED)
                {
                    let cut = if gen.gen_num() >= 7 { Effect::ratio(1, 2) } else { Effect::ratio(1, 4) };
                    chain.push(ModifierEntry::new(Phase::Status, cut, "paralysis"));
                }
                if side.conditions.contains(SideConditions::TAILWIND) {
                    chain.push(ModifierEntry::new(Phase::Field, Effect::ratio(2, 1), "tailwind"));
                }
            }
            Stat::Atk if gen.gen_num() <= 2 && snapshot.status == Status::Burn => {
                chain.push(ModifierEntry::new(Phase::Status, Effect::ratio(1, 2), "burn"));
            }
            _ => {}
        }

        chain.apply(boosted).clamp(1, u16::MAX as u32) as u16
    }))
}
