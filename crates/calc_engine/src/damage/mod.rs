//! Damage calculation.
//!
//! [`compute`] resolves one attacker-vs-defender matchup under a ruleset:
//!
//! 1. **Sides**: validation, stat projection, ability and item lookup
//! 2. **Base power**: variable-power moves, -ate abilities, BasePower rules
//! 3. **Stats**: boost stages, then Attack/Defense rules
//! 4. **Base damage**: `floor(floor(floor(2 * Level / 5 + 2) * Power * Atk / Def) / 50) + 2`
//! 5. **Damage chain**: phase-ordered modifiers, then the 16 random rolls
//!
//! Crit damage, hit counts and KO chances are derived from the same rolls.

pub mod formula;

mod context;
mod crit;
mod effectiveness;
mod ko;
mod multihit;
mod result;

pub use context::{Combatant, MoveFacts};
pub use crit::{crit_outcome, CritOutcome};
pub use effectiveness::{ability_blocks, move_effectiveness, resolve_move_type, ImmunityOverrides};
pub use formula::{get_all_rolls, get_base_damage, pokeround, ROLL_COUNT};
pub use ko::{hazard_damage, hazard_ko, n_hit_ko, KoChance, MAX_KO_HITS};
pub use multihit::{hit_counts, use_distribution, DamageDistribution};
pub use result::MatchupResult;

use crate::abilities::AbilityTraits;
use crate::core_data::{MoveCategory, MoveFlags, Stat, Type};
use crate::creature::{CreatureSnapshot, Status};
use crate::error::{CalcWarning, ValidationError};
use crate::field::FieldState;
use crate::generations::GenMechanics;
use crate::items::ItemTraits;
use crate::modifiers::{self, Effect, Holder, Modifier, ModifierChain, ModifierEntry, Phase, Stage};
use crate::moves::{fixed_damage, variable_power, Move, MoveBehavior, PowerInputs, VariablePower};
use crate::types::Effectiveness;
use formula::{apply_boost, apply_legacy_boost};

/// Compute every damage roll, crit roll and KO chance of `mv` from
/// `attacker` into `defender`.
///
/// Invalid snapshots are rejected before any formula runs. Unknown
/// abilities, items and fixed-damage moves only produce warnings.
pub fn compute<G: GenMechanics>(
    attacker: &CreatureSnapshot,
    defender: &CreatureSnapshot,
    mv: &Move,
    field: &FieldState,
    gen: &G,
) -> Result<MatchupResult, ValidationError> {
    let gen_num = gen.gen_num();
    if !gen.has_type(mv.move_type) {
        return Err(ValidationError::TypeNotInGeneration { ty: mv.move_type, gen: gen_num });
    }
    let mut warnings = Vec::new();
    let atk = Combatant::resolve(attacker, field, gen, &mut warnings)?;
    let mut def = Combatant::resolve(defender, field, gen, &mut warnings)?;
    if atk.has_trait(AbilityTraits::IGNORES_TARGET_ABILITY) || mv.flags.contains(MoveFlags::IGNORE_ABILITY) {
        def.held = def.held.without_ability();
    }

    let mut result = MatchupResult::empty(atk.stats, def.stats, mv.move_type, mv.category_in(gen_num));
    result.defender_hp = def.current_hp;
    result.defender_max_hp = def.max_hp;

    if mv.is_status() {
        result.warnings = warnings;
        return Ok(result);
    }

    let inputs = PowerInputs {
        attacker,
        defender,
        attacker_hp: atk.current_hp,
        attacker_max_hp: atk.max_hp,
        defender_hp: def.current_hp,
        defender_max_hp: def.max_hp,
        attacker_speed: atk.speed as u32,
        defender_speed: def.speed as u32,
        attacker_has_item: atk.has_item(),
        defender_has_item: def.has_item(),
        gen: gen_num,
    };

    let behavior = mv.behavior();
    let mut base_power = mv.base_power;
    let mut listed_type = mv.move_type;
    match behavior {
        Some(MoveBehavior::Fixed(kind)) => {
            let damage = fixed_damage(kind, &inputs);
            let eff = matchup_effectiveness(gen, field, &atk, &def, mv.move_type);
            let damage = if eff.is_immune() { 0 } else { damage };
            result.effectiveness = eff;
            result.rolls = [damage; ROLL_COUNT];
            result.hits = hit_counts(gen, mv.multi_hit, atk.held.ability().traits, atk.held.item().traits);
            result.warnings = warnings;
            summarize(gen, field, &def, &mut result);
            return Ok(result);
        }
        Some(MoveBehavior::Power(kind)) => {
            let resolved = variable_power(kind, mv.base_power, &inputs);
            base_power = resolved.base_power;
            if let Some(t) = resolved.move_type {
                listed_type = t;
            }
        }
        None if mv.fixed_damage => {
            warnings.push(CalcWarning::UnknownFixedDamageMove(mv.id.clone()).emit());
            result.warnings = warnings;
            return Ok(result);
        }
        None => {}
    }

    let (move_type, ate_boost) = resolve_move_type(listed_type, atk.held.ability(), gen_num);
    let category = if gen.uses_physical_special_split() {
        mv.category
    } else if move_type.is_legacy_special() {
        MoveCategory::Special
    } else {
        MoveCategory::Physical
    };
    result.move_type = move_type;
    result.category = category;

    let eff = matchup_effectiveness(gen, field, &atk, &def, move_type);
    result.effectiveness = eff;
    if eff.is_immune() || base_power == 0 {
        log::debug!("{} into {}: no damage ({:?})", mv.id, defender.species, eff);
        result.warnings = warnings;
        summarize(gen, field, &def, &mut result);
        return Ok(result);
    }

    let crit = crit_outcome(gen, mv, &atk, &def);
    let matchup = Matchup {
        gen,
        field,
        mv,
        attacker: atk,
        defender: def,
        facts: MoveFacts {
            category,
            move_type,
            flags: mv.flags,
            base_power,
            effectiveness: eff.0,
            weather: field.weather,
        },
        ate_boost,
        is_facade: behavior == Some(MoveBehavior::Power(VariablePower::Facade)),
    };

    let hit = matchup.hit(crit.guaranteed);
    result.rolls = hit.rolls;
    result.attack = hit.attack;
    result.defense = hit.defense;
    result.base_power = hit.base_power;
    result.modifiers = hit.sources;
    result.is_crit = crit.guaranteed;
    result.crit_chance = crit.chance;
    if !crit.guaranteed && crit.chance > 0.0 {
        result.crit_rolls = Some(matchup.hit(true).rolls);
    }
    result.hits = hit_counts(gen, mv.multi_hit, atk.held.ability().traits, atk.held.item().traits);
    result.warnings = warnings;
    summarize(gen, field, &def, &mut result);

    log::debug!(
        "{} into {}: {}-{} ({:.1}-{:.1}%)",
        mv.id,
        defender.species,
        result.damage_range.0,
        result.damage_range.1,
        result.percent_range.0,
        result.percent_range.1
    );
    Ok(result)
}

/// Effectiveness after immunity overrides, with ability and
/// Air Balloon immunities folded in as [`Effectiveness::IMMUNE`].
fn matchup_effectiveness<G: GenMechanics>(
    gen: &G,
    field: &FieldState,
    atk: &Combatant<'_>,
    def: &Combatant<'_>,
    move_type: Type,
) -> Effectiveness {
    let grounded = def.is_grounded(field);
    let overrides = ImmunityOverrides {
        hits_ghost: atk.has_trait(AbilityTraits::HITS_GHOST),
        ring_target: def.held.item().has(ItemTraits::RING_TARGET),
        defender_grounded: grounded,
    };
    let eff = move_effectiveness(gen, move_type, &def.snapshot.types, overrides);
    let floating = move_type == Type::Ground && def.held.item().has(ItemTraits::LEVITATES) && !grounded;
    if floating || ability_blocks(def.held.ability(), move_type, eff, grounded) {
        Effectiveness::IMMUNE
    } else {
        eff
    }
}

/// Damage range, KO chances and hazard figures from the rolls and hit counts.
fn summarize<G: GenMechanics>(gen: &G, field: &FieldState, def: &Combatant<'_>, result: &mut MatchupResult) {
    let per_use = use_distribution(&result.rolls, &result.hits);
    result.damage_range = (per_use.min(), per_use.max());
    let max_hp = (def.max_hp as f64).max(1.0);
    result.percent_range = (
        100.0 * per_use.min() as f64 / max_hp,
        100.0 * per_use.max() as f64 / max_hp,
    );

    let hp = def.current_hp as u32;
    result.ko_chance = per_use.chance_at_least(hp);
    result.n_hit_ko = n_hit_ko(&per_use, hp);
    result.hazard_damage = hazard_damage(
        gen,
        field.side(def.snapshot.side),
        &def.snapshot.types,
        def.max_hp,
        def.is_grounded(field),
    );
    result.hazard_ko = hazard_ko(&per_use, def.max_hp as u32, result.hazard_damage);
}

/// One hit's worth of figures.
struct HitRolls {
    rolls: [u32; ROLL_COUNT],
    attack: u32,
    defense: u32,
    base_power: u32,
    sources: Vec<&'static str>,
}

/// Everything fixed about the matchup once type, category and
/// effectiveness are known.
struct Matchup<'a, G> {
    gen: &'a G,
    field: &'a FieldState,
    mv: &'a Move,
    attacker: Combatant<'a>,
    defender: Combatant<'a>,
    facts: MoveFacts,
    ate_boost: Option<Modifier>,
    is_facade: bool,
}

impl<G: GenMechanics> Matchup<'_, G> {
    fn hit(&self, is_crit: bool) -> HitRolls {
        let gen = self.gen;
        let gen_num = gen.gen_num();
        let (atk, def) = (&self.attacker, &self.defender);
        let actx = self.facts.rule_context(atk, is_crit);
        let dctx = self.facts.rule_context(def, is_crit);
        let physical = self.facts.category == MoveCategory::Physical;
        let defending_side = self.field.side(def.snapshot.side);

        // Base power
        let mut bp_chain = ModifierChain::new();
        if let Some(boost) = self.ate_boost {
            bp_chain.push(ModifierEntry::new(Phase::Ability, Effect::Scaled(boost), "ate"));
        }
        bp_chain.extend(atk.held.entries(Stage::BasePower, Holder::Attacker, &actx, gen_num, false));
        bp_chain.extend(def.held.entries(Stage::BasePower, Holder::Defender, &dctx, gen_num, false));
        let base_power = bp_chain.apply(self.facts.base_power).max(1);

        // Attack and defense
        let (atk_stat, def_stat) = if physical {
            (Stat::Atk, Stat::Def)
        } else if gen.has_unified_special() {
            (Stat::Spa, Stat::Spa)
        } else {
            (Stat::Spa, Stat::Spd)
        };
        let mut atk_boost = atk.snapshot.boosts[atk_stat];
        let mut def_boost = def.snapshot.boosts[def_stat];
        if def.has_trait(AbilityTraits::UNAWARE) {
            atk_boost = 0;
        }
        if atk.has_trait(AbilityTraits::UNAWARE) {
            def_boost = 0;
        }
        if is_crit {
            if gen_num == 1 {
                atk_boost = 0;
                def_boost = 0;
            } else {
                atk_boost = atk_boost.max(0);
                def_boost = def_boost.min(0);
            }
        }
        let boost = |stat: u16, stage: i8| {
            if gen.is_legacy() {
                apply_legacy_boost(stat as u32, stage)
            } else {
                apply_boost(stat as u32, stage)
            }
        };

        let mut attack_chain = ModifierChain::new();
        attack_chain.extend(atk.held.entries(Stage::Attack, Holder::Attacker, &actx, gen_num, false));
        attack_chain.extend(def.held.entries(Stage::Attack, Holder::Defender, &dctx, gen_num, false));
        let mut defense_chain = ModifierChain::new();
        defense_chain.extend(def.held.entries(Stage::Defense, Holder::Defender, &dctx, gen_num, false));
        if gen_num <= 2 && !is_crit {
            if physical && atk.snapshot.status == Status::Burn {
                attack_chain.push(ModifierEntry::new(Phase::Status, Effect::ratio(1, 2), "burn"));
            }
            if defending_side.has_screen(physical) {
                defense_chain.push(ModifierEntry::new(Phase::Field, Effect::ratio(2, 1), "screen"));
            }
        }
        let mut attack = attack_chain.apply(boost(atk.stats[atk_stat], atk_boost)).max(1);
        let mut defense = defense_chain.apply(boost(def.stats[def_stat], def_boost)).max(1);
        if gen_num <= 2 && (attack > 255 || defense > 255) {
            attack = (attack / 4).max(1);
            defense = (defense / 4).max(1);
        }

        // Base damage
        let level = if is_crit && gen.crit_doubles_level() {
            atk.snapshot.level as u32 * 2
        } else {
            atk.snapshot.level as u32
        };
        let mut base = get_base_damage(level, base_power, attack, defense);
        if gen.is_legacy() {
            base = base.min(999);
        }

        // Damage chain
        let mut chain = ModifierChain::new();
        if self.field.doubles && self.mv.flags.contains(MoveFlags::SPREAD) && gen_num >= 3 {
            let spread = match gen_num {
                3 => Effect::ratio(1, 2),
                4 => Effect::ratio(3, 4),
                _ => Effect::Scaled(Modifier::THREE_QUARTERS),
            };
            chain.push(ModifierEntry::new(Phase::Field, spread, "spread"));
        }
        if atk.snapshot.has_type(self.facts.move_type) {
            let stab = gen.stab_effect(atk.has_trait(AbilityTraits::ADAPTABILITY));
            chain.push(ModifierEntry::new(Phase::Stab, stab, "stab"));
        }
        if self.facts.effectiveness != Effectiveness::NEUTRAL.0 {
            let eff = Effect::ratio(self.facts.effectiveness as u32, Effectiveness::NEUTRAL.0 as u32);
            chain.push(ModifierEntry::new(Phase::Effectiveness, eff, "effectiveness"));
        }
        if gen_num >= 3
            && physical
            && atk.snapshot.status == Status::Burn
            && !atk.has_trait(AbilityTraits::IGNORES_BURN)
            && !(gen_num >= 6 && self.is_facade)
        {
            chain.push(ModifierEntry::new(Phase::Burn, gen.burn_effect(), "burn"));
        }
        if let Some(effect) = gen.weather_effect(self.field.weather, self.facts.move_type) {
            chain.push(
                ModifierEntry::new(Phase::Weather, effect, "weather").exclusive(modifiers::ExclusiveGroup::Weather),
            );
        }
        let terrain = gen
            .terrain_effect(self.field.terrain, self.facts.move_type, atk.is_grounded(self.field))
            .or_else(|| gen.misty_dragon_effect(self.field.terrain, self.facts.move_type, def.is_grounded(self.field)));
        if let Some(effect) = terrain {
            chain.push(
                ModifierEntry::new(Phase::Terrain, effect, "terrain").exclusive(modifiers::ExclusiveGroup::Terrain),
            );
        }
        if gen_num >= 3
            && !is_crit
            && !atk.has_trait(AbilityTraits::IGNORES_SCREENS)
            && defending_side.has_screen(physical)
        {
            chain.push(
                ModifierEntry::new(Phase::Screen, gen.screen_effect(self.field.doubles), "screen")
                    .exclusive(modifiers::ExclusiveGroup::Screen),
            );
        }
        if is_crit && !gen.crit_doubles_level() {
            chain.push(ModifierEntry::new(Phase::Critical, gen.crit_effect(), "critical"));
        }
        chain.extend(atk.held.entries(Stage::Damage, Holder::Attacker, &actx, gen_num, false));
        chain.extend(def.held.entries(Stage::Damage, Holder::Defender, &dctx, gen_num, false));

        let damage = chain.apply(base);
        let nullified = chain.is_nullified();
        let rolls = get_all_rolls(damage).map(|r| if nullified { 0 } else { r.max(1) });

        let sources = [&bp_chain, &attack_chain, &defense_chain, &chain]
            .iter()
            .flat_map(|c| modifiers::resolve(c.entries()))
            .map(|e| e.source)
            .collect();

        HitRolls {
            rolls,
            attack,
            defense,
            base_power,
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{SideConditions, SideId, Terrain, Weather};
    use crate::generations::Generation;
    use crate::moves::MultiHit;
    use crate::types::TypeSet;

    /// Hardy, 31 IVs, 0 EVs, L100: 300 Atk.
    fn attacker() -> CreatureSnapshot {
        CreatureSnapshot::new("attacker", [100, 132, 100, 100, 100, 100], TypeSet::single(Type::Normal))
    }

    /// Same spread: 341 HP, 150 Def.
    fn defender() -> CreatureSnapshot {
        CreatureSnapshot::new("defender", [100, 100, 57, 100, 100, 100], TypeSet::single(Type::Normal))
            .side(SideId::P2)
    }

    fn rock_move() -> Move {
        Move::new("Test Rock", 100, Type::Rock, MoveCategory::Physical)
    }

    fn run(a: &CreatureSnapshot, d: &CreatureSnapshot, mv: &Move, field: &FieldState) -> MatchupResult {
        compute(a, d, mv, field, &Generation::Gen9).unwrap()
    }

    #[test]
    fn test_reference_damage() {
        let r = run(&attacker(), &defender(), &rock_move(), &FieldState::new());
        assert_eq!(r.attack, 300);
        assert_eq!(r.defense, 150);
        assert_eq!(r.rolls[0], 144);
        assert_eq!(r.rolls[15], 170);
        assert_eq!(r.damage_range, (144, 170));
        assert!(r.rolls.windows(2).all(|w| w[0] <= w[1]));
        assert!(r.modifiers.is_empty());
        assert_eq!(r.effectiveness, Effectiveness::NEUTRAL);
    }

    #[test]
    fn test_same_result_in_gen3() {
        let r = compute(&attacker(), &defender(), &rock_move(), &FieldState::new(), &Generation::Gen3).unwrap();
        assert_eq!(r.category, MoveCategory::Physical);
        assert_eq!(r.damage_range, (144, 170));
    }

    #[test]
    fn test_stab_and_effectiveness() {
        let a = attacker().types(TypeSet::single(Type::Rock));
        let d = defender().types(TypeSet::single(Type::Fire));
        let r = run(&a, &d, &rock_move(), &FieldState::new());
        // 170 * 1.5 = 255, * 2 = 510
        assert_eq!(r.rolls[15], 510);
        assert_eq!(r.modifiers, vec!["stab", "effectiveness"]);
    }

    #[test]
    fn test_terrain_applies_after_stab() {
        let a = attacker().types(TypeSet::single(Type::Electric));
        let bolt = Move::new("Test Bolt", 60, Type::Electric, MoveCategory::Special);
        let field = FieldState::new().with_terrain(Terrain::Electric);
        let r = run(&a, &defender(), &bolt, &field);
        // 52 * 1.5 = 78, * 1.3 = 101.4 -> 101 (terrain first would give 102)
        assert_eq!(r.modifiers, vec!["stab", "terrain"]);
        assert_eq!(r.damage_range, (85, 101));
        assert_eq!(r.rolls, [85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 101]);
    }

    #[test]
    fn test_immune_and_status_moves() {
        let ghost = defender().types(TypeSet::single(Type::Ghost));
        let tackle = Move::new("Tackle", 40, Type::Normal, MoveCategory::Physical);
        let r = run(&attacker(), &ghost, &tackle, &FieldState::new());
        assert!(r.is_no_damage());
        assert_eq!(r.effectiveness, Effectiveness::IMMUNE);
        assert_eq!(r.ko_chance, 0.0);

        let scrappy = attacker().ability("Scrappy");
        assert!(!run(&scrappy, &ghost, &tackle, &FieldState::new()).is_no_damage());

        let growl = Move::new("Growl", 0, Type::Normal, MoveCategory::Status);
        assert!(run(&attacker(), &defender(), &growl, &FieldState::new()).is_no_damage());
    }

    #[test]
    fn test_crit_rolls() {
        let r = run(&attacker(), &defender(), &rock_move(), &FieldState::new());
        assert!(!r.is_crit);
        assert_eq!(r.crit_chance, 1.0 / 24.0);
        // floor(170 * 3 / 2)
        assert_eq!(r.crit_rolls.map(|c| c[15]), Some(255));

        let sure = rock_move().always_crit();
        let r = run(&attacker(), &defender(), &sure, &FieldState::new());
        assert!(r.is_crit);
        assert_eq!(r.crit_rolls, None);
        assert_eq!(r.rolls[15], 255);
    }

    #[test]
    fn test_burn_and_guts() {
        let burned = attacker().status(Status::Burn);
        let r = run(&burned, &defender(), &rock_move(), &FieldState::new());
        assert_eq!(r.rolls[15], 85);

        let guts = burned.ability("Guts");
        let r = run(&guts, &defender(), &rock_move(), &FieldState::new());
        assert_eq!(r.attack, 450);
        assert_eq!(r.rolls[15], 254);
    }

    #[test]
    fn test_screens() {
        let field = FieldState::new().with_side_conditions(SideId::P2, SideConditions::REFLECT);
        let r = run(&attacker(), &defender(), &rock_move(), &field);
        assert_eq!(r.rolls[15], 85);
        let special = Move::new("Test Gem", 100, Type::Rock, MoveCategory::Special);
        let r = run(&attacker(), &defender(), &special, &field);
        assert!(!r.modifiers.contains(&"screen"));
        let infiltrator = attacker().ability("Infiltrator");
        assert_eq!(run(&infiltrator, &defender(), &rock_move(), &field).rolls[15], 170);
    }

    #[test]
    fn test_mold_breaker_and_levitate() {
        let quake = Move::new("Earthquake", 100, Type::Ground, MoveCategory::Physical);
        let floating = defender().ability("Levitate");
        assert!(run(&attacker(), &floating, &quake, &FieldState::new()).is_no_damage());
        let breaker = attacker().ability("Mold Breaker");
        assert_eq!(run(&breaker, &floating, &quake, &FieldState::new()).rolls[15], 170);
        let balloon = defender().item("Air Balloon");
        assert!(run(&breaker, &balloon, &quake, &FieldState::new()).is_no_damage());
    }

    #[test]
    fn test_primal_weather_nullifies() {
        let field = FieldState::new().with_weather(Weather::HarshSun);
        let surf = Move::new("Surf", 90, Type::Water, MoveCategory::Special);
        let r = run(&attacker(), &defender(), &surf, &field);
        assert!(r.is_no_damage());
        assert_eq!(r.effectiveness, Effectiveness::NEUTRAL);
    }

    #[test]
    fn test_fixed_damage() {
        let toss = Move::new("Seismic Toss", 0, Type::Fighting, MoveCategory::Physical).fixed_damage();
        let r = run(&attacker(), &defender(), &toss, &FieldState::new());
        assert_eq!(r.rolls, [100; ROLL_COUNT]);
        let ghost = defender().types(TypeSet::single(Type::Ghost));
        assert!(run(&attacker(), &ghost, &toss, &FieldState::new()).is_no_damage());

        let mystery = Move::new("Mystery Beam", 0, Type::Normal, MoveCategory::Special).fixed_damage();
        let r = run(&attacker(), &defender(), &mystery, &FieldState::new());
        assert!(r.is_no_damage());
        assert_eq!(r.warnings, vec![CalcWarning::UnknownFixedDamageMove("Mystery Beam".into())]);
    }

    #[test]
    fn test_multi_hit_and_ko() {
        let r = run(&attacker(), &defender(), &rock_move(), &FieldState::new());
        assert_eq!(r.defender_max_hp, 341);
        assert_eq!(r.ko_chance, 0.0);
        // 288-340 over two uses, 432-510 over three
        assert_eq!(r.n_hit_ko[1].chance, 0.0);
        assert_eq!(r.guaranteed_ko_hits(), Some(3));

        let double = rock_move().multi_hit(MultiHit::Fixed(2));
        let r = run(&attacker(), &defender(), &double, &FieldState::new());
        assert_eq!(r.hits, vec![(2, 1.0)]);
        assert_eq!(r.damage_range, (288, 340));
    }

    #[test]
    fn test_hazard_ko() {
        let field = FieldState::new().with_side_conditions(SideId::P2, SideConditions::STEALTH_ROCK);
        let strong = Move::new("Test Rock", 250, Type::Rock, MoveCategory::Physical);
        let r = run(&attacker(), &defender(), &strong, &field);
        // 341 * 4 / 32
        assert_eq!(r.hazard_damage, 42);
        assert!(r.hazard_ko >= r.ko_chance);
    }

    #[test]
    fn test_invalid_snapshot() {
        let bad = attacker().boost(Stat::Atk, 7);
        let err = compute(&bad, &defender(), &rock_move(), &FieldState::new(), &Generation::Gen9).unwrap_err();
        assert_eq!(err, ValidationError::Boost { stat: Stat::Atk, value: 7 });
    }
}
