mod common;

use calc_engine::{
    compute, CreatureSnapshot, Effectiveness, FieldState, GeneticParameters, Generation, GenerationConstants,
    HpFraction, Move, MoveCategory, MoveFlags, NatureId, Ruleset, SideConditions, SideId, Stat, Terrain, Type,
    TypeSet, ValidationError, Weather,
};
use common::*;

fn rock() -> Move {
    Move::new("Test Rock", 100, Type::Rock, MoveCategory::Physical)
}

#[test]
fn test_reference_rolls() {
    let r = compute(&reference_attacker(), &reference_defender(), &rock(), &FieldState::new(), &Generation::Gen9)
        .unwrap();
    assert_eq!(
        r.rolls,
        [144, 146, 147, 149, 151, 153, 154, 156, 158, 159, 161, 163, 164, 166, 168, 170]
    );
    assert_eq!(r.defender_max_hp, 341);
    assert_eq!(r.defender_hp, 341);
}

#[test]
fn test_every_modern_generation_agrees() {
    for gen in [Generation::Gen3, Generation::Gen5, Generation::Gen7, Generation::Gen9] {
        let r = compute(&reference_attacker(), &reference_defender(), &rock(), &FieldState::new(), &gen).unwrap();
        assert_eq!(r.damage_range, (144, 170), "{gen:?}");
    }
}

#[test]
fn test_spread_move_in_doubles() {
    let slide = rock().flags(MoveFlags::SPREAD);
    let field = FieldState { doubles: true, ..FieldState::new() };
    let r = compute(&reference_attacker(), &reference_defender(), &slide, &field, &Generation::Gen9).unwrap();
    assert_eq!(r.damage_range, (107, 127));
    assert!(r.modifiers.contains(&"spread"));

    let singles = compute(&reference_attacker(), &reference_defender(), &slide, &FieldState::new(), &Generation::Gen9)
        .unwrap();
    assert_eq!(singles.damage_range, (144, 170));
}

#[test]
fn test_sun_boosts_fire() {
    // Special attack and defense are both 236
    let flame = Move::new("Test Flame", 100, Type::Fire, MoveCategory::Special);
    let field = FieldState::new().with_weather(Weather::Sun);
    let r = compute(&reference_attacker(), &reference_defender(), &flame, &field, &Generation::Gen9).unwrap();
    assert_eq!(r.attack, 236);
    assert_eq!(r.defense, 236);
    assert_eq!(r.damage_range, (109, 129));
}

#[test]
fn test_damage_stage_modifiers_apply_in_order() {
    let pikachu = reference_attacker().types(TypeSet::single(Type::Electric));
    let vaporeon = reference_defender().types(TypeSet::single(Type::Water));
    let bolt = Move::new("Test Bolt", 60, Type::Electric, MoveCategory::Special);
    let field = FieldState::new().with_terrain(Terrain::Electric);
    let r = compute(&pikachu, &vaporeon, &bolt, &field, &Generation::Gen9).unwrap();
    // 52 -> 78 -> 156 -> 202.8 rounds to 203; terrain before STAB would reach 204
    assert_eq!(r.modifiers, vec!["stab", "effectiveness", "terrain"]);
    assert_eq!(r.rolls[0], 172);
    assert_eq!(r.rolls[15], 203);
}

#[test]
fn test_sun_and_stab_stack() {
    let fire = reference_attacker().types(TypeSet::single(Type::Fire));
    let flame = Move::new("Test Flame", 60, Type::Fire, MoveCategory::Special);
    let field = FieldState::new().with_weather(Weather::Sun);
    let r = compute(&fire, &reference_defender(), &flame, &field, &Generation::Gen9).unwrap();
    // 52 * 1.5 = 78, * 1.5 = 117
    assert_eq!(r.modifiers, vec!["stab", "weather"]);
    assert_eq!(r.damage_range, (99, 117));
}

#[test]
fn test_terrain_needs_a_grounded_attacker() {
    let flyer = reference_attacker().types(TypeSet::dual(Type::Electric, Type::Flying).unwrap());
    let bolt = Move::new("Test Bolt", 60, Type::Electric, MoveCategory::Special);
    let field = FieldState::new().with_terrain(Terrain::Electric);
    let r = compute(&flyer, &reference_defender(), &bolt, &field, &Generation::Gen9).unwrap();
    assert_eq!(r.modifiers, vec!["stab"]);
    assert_eq!(r.max_damage(), 78);
}

#[test]
fn test_damaged_defender_ko_chance() {
    let hurt = reference_defender().hp(HpFraction::exact(150, 341));
    let r = compute(&reference_attacker(), &hurt, &rock(), &FieldState::new(), &Generation::Gen9).unwrap();
    assert_eq!(r.defender_hp, 150);
    // 151..=170 is 12 of 16 rolls
    assert!((r.ko_chance - 12.0 / 16.0).abs() < 1e-9);
    assert_eq!(r.guaranteed_ko_hits(), Some(2));
}

#[test]
fn test_quadruple_effectiveness_and_ohko() {
    let heatran = TypeSet::dual(Type::Fire, Type::Steel).unwrap();
    let defender = CreatureSnapshot::new("heatran", [91, 90, 106, 130, 106, 77], heatran)
        .side(SideId::P2);
    let quake = Move::new("Earthquake", 100, Type::Ground, MoveCategory::Physical);
    let r = compute(&garchomp(), &defender, &quake, &FieldState::new(), &Generation::Gen9).unwrap();
    assert_eq!(r.effectiveness, Effectiveness::QUADRUPLE);
    assert_eq!(r.attacker_stats[Stat::Atk], 359);
    assert_eq!(r.guaranteed_ko_hits(), Some(1));
}

#[test]
fn test_ruleset_with_custom_constants() {
    let ruleset = Ruleset::new(Generation::Gen9);
    let r = compute(&reference_attacker(), &reference_defender(), &rock(), &FieldState::new(), &ruleset).unwrap();
    assert_eq!(r.damage_range, (144, 170));

    let capped = ruleset.with_constants(GenerationConstants {
        max_total_evs: 400,
        ..Generation::Gen9.constants()
    });
    let invested = reference_attacker().genetics(GeneticParameters::modern(
        NatureId::Hardy,
        [31; 6],
        [0, 252, 0, 0, 0, 252],
    ));
    let err = compute(&invested, &reference_defender(), &rock(), &FieldState::new(), &capped).unwrap_err();
    assert_eq!(err, ValidationError::EvTotal { total: 504, max: 400 });
}

#[test]
fn test_aurora_veil_and_reflect_do_not_stack() {
    let both = SideConditions::REFLECT | SideConditions::AURORA_VEIL;
    let field = FieldState::new().with_side_conditions(SideId::P2, both);
    let r = compute(&reference_attacker(), &reference_defender(), &rock(), &field, &Generation::Gen9).unwrap();
    assert_eq!(r.max_damage(), 85);
    assert_eq!(r.modifiers.iter().filter(|&&m| m == "screen").count(), 1);
}

#[test]
fn test_result_serializes() {
    let r = compute(&reference_attacker(), &reference_defender(), &rock(), &FieldState::new(), &Generation::Gen9)
        .unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["damage_range"], serde_json::json!([144, 170]));
    assert_eq!(json["move_type"], "rock");
}

#[test]
fn test_rolls_never_drop_as_attack_rises() {
    let mut last = [0u32; 16];
    for ev in (0..=252).step_by(4) {
        let attacker = reference_attacker().genetics(GeneticParameters::modern(
            NatureId::Hardy,
            [31; 6],
            [0, ev, 0, 0, 0, 0],
        ));
        let r = compute(&attacker, &reference_defender(), &rock(), &FieldState::new(), &Generation::Gen9).unwrap();
        assert!(r.rolls.iter().zip(&last).all(|(now, before)| now >= before), "dropped at {ev} EVs");
        last = r.rolls;
    }
}

#[test]
fn test_types_missing_from_generation_are_rejected() {
    let fairy = reference_defender().types(TypeSet::single(Type::Fairy));
    let err = compute(&reference_attacker(), &fairy, &rock(), &FieldState::new(), &Generation::Gen5).unwrap_err();
    assert_eq!(err, ValidationError::TypeNotInGeneration { ty: Type::Fairy, gen: 5 });
    assert!(compute(&reference_attacker(), &fairy, &rock(), &FieldState::new(), &Generation::Gen6).is_ok());

    let bite = Move::new("Bite", 60, Type::Dark, MoveCategory::Physical);
    let err = compute(&reference_attacker(), &reference_defender(), &bite, &FieldState::new(), &Generation::Gen1)
        .unwrap_err();
    assert_eq!(err, ValidationError::TypeNotInGeneration { ty: Type::Dark, gen: 1 });
}
