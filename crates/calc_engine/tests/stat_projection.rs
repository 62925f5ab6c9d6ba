//! Stat projection against known cartridge values.

mod common;

use calc_engine::stats::project_checked;
use calc_engine::{
    final_stats, project, FieldState, GeneticParameters, Generation, NatureId, Stat, StatTable, Status,
    ValidationError,
};
use common::*;

#[test]
fn test_garchomp_level_100() {
    let stats = project(&StatTable(GARCHOMP), 100, &jolly_garchomp(), false);
    assert_eq!(stats.0, [357, 359, 227, 176, 206, 333]);
}

#[test]
fn test_garchomp_level_50() {
    let stats = project(&StatTable(GARCHOMP), 50, &jolly_garchomp(), false);
    assert_eq!(stats.0, [183, 182, 116, 90, 105, 169]);
}

#[test]
fn test_legacy_mewtwo() {
    let stats = project(&StatTable(MEWTWO), 100, &GeneticParameters::legacy_max(), true);
    assert_eq!(stats[Stat::Hp], 415);
    assert_eq!(stats[Stat::Atk], 318);
    assert_eq!(stats[Stat::Def], 278);
    assert_eq!(stats[Stat::Spa], 406);
    assert_eq!(stats[Stat::Spe], 358);
}

#[test]
fn test_projection_is_monotonic_in_level() {
    let g = jolly_garchomp();
    let mut last = project(&StatTable(GARCHOMP), 1, &g, false);
    for level in 2..=100 {
        let next = project(&StatTable(GARCHOMP), level, &g, false);
        for stat in Stat::ALL {
            assert!(next[stat] >= last[stat], "{stat:?} dropped at level {level}");
        }
        last = next;
    }
}

#[test]
fn test_checked_projection_rejects() {
    let constants = Generation::Gen9.constants();
    let base = StatTable(GARCHOMP);
    assert_eq!(
        project_checked(&base, 0, &jolly_garchomp(), &constants),
        Err(ValidationError::Level(0))
    );
    let too_many = GeneticParameters::modern(NatureId::Hardy, [31; 6], [252, 252, 252, 0, 0, 0]);
    assert!(matches!(
        project_checked(&base, 100, &too_many, &constants),
        Err(ValidationError::EvTotal { .. })
    ));
    let zero = StatTable([0, 1, 1, 1, 1, 1]);
    assert_eq!(
        project_checked(&zero, 100, &jolly_garchomp(), &constants),
        Err(ValidationError::ZeroBaseStat(Stat::Hp))
    );
}

#[test]
fn test_final_stats_apply_field_and_status() {
    let snap = garchomp().status(Status::Paralysis).item("Choice Scarf");
    let stats = final_stats(&snap, &FieldState::new(), &Generation::Gen9).unwrap();
    // 333 * 1.5 = 499, halved by paralysis
    assert_eq!(stats[Stat::Spe], 249);
    assert_eq!(stats[Stat::Atk], 359);
}
